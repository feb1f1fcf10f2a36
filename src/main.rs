use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{self, Command},
    rc::Rc,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use meego::{
    compiler::{compiler::compile, stdlib::write_stdlib},
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

#[derive(Parser, Debug)]
#[command(name = "meegoc", version, about = "Compiles meego programs to C++")]
struct Args {
    /// Input source file
    input: PathBuf,

    /// Directory receiving main.cpp, Builtins.cpp and the binary
    #[arg(short, long, value_name = "DIR", default_value = "build")]
    out_dir: PathBuf,

    /// Only write the C++ sources, do not invoke the C++ compiler
    #[arg(long)]
    emit_only: bool,

    /// Run the compiled binary and print its output
    #[arg(long, conflicts_with = "emit_only")]
    run: bool,

    /// C++ compiler to invoke
    #[arg(long, value_name = "PATH", default_value = "g++")]
    cxx: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else if env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    let start = Instant::now();
    let generated = match generate(&source, &file_name) {
        Ok(generated) => generated,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            process::exit(1);
        }
    };
    info!("Total time for C++ generation: {:?}", start.elapsed());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    let main_path = args.out_dir.join("main.cpp");
    fs::write(&main_path, generated)
        .with_context(|| format!("failed to write {}", main_path.display()))?;
    let builtins_path = write_stdlib(&args.out_dir)
        .with_context(|| format!("failed to write builtins into {}", args.out_dir.display()))?;

    info!(
        "Wrote {} and {}",
        main_path.display(),
        builtins_path.display()
    );

    if args.emit_only {
        return Ok(());
    }

    let binary_path = args.out_dir.join("output");
    build_binary(&args.cxx, &main_path, &binary_path)?;
    info!("Compiled using {}", args.cxx);

    if args.run {
        let output = Command::new(&binary_path)
            .output()
            .with_context(|| format!("failed to run {}", binary_path.display()))?;

        print!("{}", String::from_utf8_lossy(&output.stdout));

        if !output.status.success() {
            bail!("{} exited with {}", binary_path.display(), output.status);
        }
    }

    info!("Total time: {:?}", start.elapsed());

    Ok(())
}

/// Runs every compiler phase and returns the generated C++.
fn generate(source: &str, file_name: &str) -> Result<String, Error> {
    let tokenize_start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    info!("Tokenized in {:?}", tokenize_start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name.to_string()))?;
    info!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let (type_checker, typed_program) = type_check(&program)?;
    info!("Type checked in {:?}", type_check_start.elapsed());

    let compile_start = Instant::now();
    let generated = compile(&typed_program, &type_checker);
    info!("Generated C++ in {:?}", compile_start.elapsed());

    Ok(generated)
}

fn build_binary(cxx: &str, main_path: &Path, binary_path: &Path) -> Result<()> {
    let output = Command::new(cxx)
        .arg("-std=c++11")
        .arg("-o")
        .arg(binary_path)
        .arg(main_path)
        .output()
        .with_context(|| format!("failed to invoke {}", cxx))?;

    if !output.status.success() {
        bail!(
            "{} failed to compile {}:\n{}",
            cxx,
            main_path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
