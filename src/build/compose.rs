use super::spec::BuildSpec;
use crate::target::Target;

/// Compose the full command line for building `target`.
///
/// Order is fixed: toolchain, `-shared`, flags, sources, `-I dir` pairs,
/// `-target <triple>`, `-o <path>`. Cross compilers are not guaranteed to be
/// order-insensitive, so keep it that way.
pub fn compose_args(spec: &BuildSpec, target: Target) -> Vec<String> {
    let mut args = Vec::with_capacity(
        spec.toolchain().len()
            + spec.flags().len()
            + spec.sources().len()
            + spec.include_dirs().len() * 2
            + 5,
    );

    args.extend(spec.toolchain().iter().cloned());
    args.push("-shared".to_string());
    args.extend(spec.flags().iter().cloned());
    args.extend(spec.sources().iter().cloned());

    for dir in spec.include_dirs() {
        args.push("-I".to_string());
        args.push(dir.clone());
    }

    args.push("-target".to_string());
    args.push(target.triple());
    args.push("-o".to_string());
    args.push(spec.output_path(target));

    args
}

/// Render a command line for display, quoting arguments that contain spaces.
pub fn display_command(args: &[String]) -> String {
    args.iter()
        .map(|arg| {
            if arg.contains(char::is_whitespace) {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
