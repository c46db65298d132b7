use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use scompile_backend_core::BackendRegistry;
use scompile_backend_glsl::GlslBackend;

/// scompile — HLSL to GLSL shader transpiler
#[derive(Parser)]
#[command(
    name = "scompile",
    version,
    about,
    override_usage = "scompile -glsl <input_file>"
)]
struct Cli {
    /// Target dialect option (e.g. `-glsl`)
    #[arg(value_name = "OPTION", allow_hyphen_values = true)]
    option: String,

    /// Input shader file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> ExitCode {
    // Usage errors exit with code 1, not clap's default.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::FAILURE;
        }
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> miette::Result<()> {
    // 1. Backend dispatch: `-glsl` selects the "glsl" target.
    let mut registry = BackendRegistry::new();
    registry.register(Box::new(GlslBackend));

    let target = cli
        .option
        .strip_prefix('-')
        .ok_or_else(|| miette::miette!("unknown option: {}", cli.option))?;
    let backend = registry.find(target).ok_or_else(|| {
        let available = registry
            .list_targets()
            .iter()
            .map(|t| format!("-{t}"))
            .collect::<Vec<_>>()
            .join(", ");
        miette::miette!("unknown option: {} (available: {})", cli.option, available)
    })?;

    // 2. Read source file.
    let source = std::fs::read_to_string(&cli.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", cli.input.display()))?;

    // 3. Parse to IR.
    let ir = scompile_parser::parse(&source)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err("HLSL parse failed")?;

    // 4. Generate target-dialect source.
    let translated = backend
        .generate(&ir)
        .map_err(|e| miette::miette!("{e}"))
        .wrap_err("generation failed")?;

    // 5. Write output only after generation succeeded in full.
    let output_path = derive_output_path(&cli.input, backend.file_extension());
    std::fs::write(&output_path, translated)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "Compiled: {} -> {}",
        cli.input.display(),
        output_path.display()
    );
    Ok(())
}

/// Derives the output path by replacing the input's final extension (or
/// appending one if the input has none).
fn derive_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}
