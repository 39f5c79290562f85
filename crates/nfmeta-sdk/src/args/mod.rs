mod resolve;

pub use resolve::{resolve_arguments, ArgumentSource, ResolvedArgument, ResolvedArguments};
