//! Command implementations.

use crate::cli::CompileArgs;
use anyhow::Context;
use avroforge_codegen::{LinkOptions, compile_path, emit_file_map, prepare_target};
use avroforge_core::DriverRegistry;
use std::io::Write;

/// Prints the module name of every registered driver.
pub fn list_drivers(out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Supported Avro drivers:")?;
    for module in DriverRegistry::new().list() {
        writeln!(out, " - {}", module)?;
    }
    Ok(())
}

/// Lexes, parses, compiles and links the sources, then writes the tree.
pub fn compile(args: &CompileArgs) -> anyhow::Result<()> {
    let options = LinkOptions::new()
        .driver(args.avro_driver.as_str())
        .vendor_runtime(!args.no_runtime);

    tracing::debug!("compiling schemas from {}", args.avro_source_directory.display());
    let files = compile_path(&args.avro_source_directory, &options).with_context(|| {
        format!(
            "failed to compile schemas from '{}'",
            args.avro_source_directory.display()
        )
    })?;

    DriverRegistry::new()
        .resolve(&args.avro_driver)
        .with_context(|| format!("unknown Avro driver '{}'", args.avro_driver))?;

    if args.dry_run {
        tracing::info!("dry run: {} files not written", files.len());
        return Ok(());
    }

    prepare_target(&args.rust_target_directory, args.force).with_context(|| {
        format!(
            "cannot write to '{}' (use --force to replace it)",
            args.rust_target_directory.display()
        )
    })?;

    tracing::info!("writing compiled Rust module");
    emit_file_map(&files, &args.rust_target_directory).with_context(|| {
        format!(
            "failed to write module tree to '{}'",
            args.rust_target_directory.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const SCHEMA: &str = r#"{"type":"record","name":"User","namespace":"com.acme",
        "fields":[{"name":"name","type":"string"}]}"#;

    fn args(source: &Path, target: &Path) -> CompileArgs {
        CompileArgs {
            avro_source_directory: source.to_path_buf(),
            rust_target_directory: target.to_path_buf(),
            avro_driver: avroforge_core::DEFAULT_DRIVER.to_string(),
            dry_run: false,
            force: false,
            no_runtime: false,
        }
    }

    fn sources() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("user.avsc"), SCHEMA).expect("Failed to write schema");
        dir
    }

    #[test]
    fn test_list_drivers() {
        let mut out = Vec::new();
        list_drivers(&mut out).expect("Failed to list drivers");
        let text = String::from_utf8(out).expect("Failed to decode output");
        assert!(text.starts_with("Supported Avro drivers:\n"));
        assert!(text.contains(" - apache_avro_binary_driver\n"));
        assert!(text.contains(" - json_driver\n"));
    }

    #[test]
    fn test_compile_writes_tree() {
        let source = sources();
        let out = tempfile::tempdir().expect("Failed to create temp dir");
        let target = out.path().join("build");

        compile(&args(source.path(), &target)).expect("Failed to compile");
        let unit = fs::read_to_string(target.join("com/acme/mod.rs")).expect("Failed to read unit");
        assert!(unit.contains("pub struct User {"));
        assert!(target.join("avroforge_core/mod.rs").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let source = sources();
        let out = tempfile::tempdir().expect("Failed to create temp dir");
        let target = out.path().join("build");
        let mut args = args(source.path(), &target);
        args.dry_run = true;

        compile(&args).expect("Failed to compile");
        assert!(!target.exists());
    }

    #[test]
    fn test_existing_target_needs_force() {
        let source = sources();
        let out = tempfile::tempdir().expect("Failed to create temp dir");
        let target = out.path().join("build");
        fs::create_dir_all(&target).expect("Failed to create target");
        fs::write(target.join("stale.rs"), "").expect("Failed to write stale file");

        let mut args = args(source.path(), &target);
        assert!(compile(&args).is_err());
        assert!(target.join("stale.rs").exists());

        args.force = true;
        args.no_runtime = true;
        compile(&args).expect("Failed to compile with force");
        assert!(!target.join("stale.rs").exists());
        assert!(!target.join("avroforge_core").exists());
        let root = fs::read_to_string(target.join("mod.rs")).expect("Failed to read root");
        assert!(root.starts_with("pub use ::avroforge_core;\n"));
    }

    #[test]
    fn test_unknown_driver_fails() {
        let source = sources();
        let out = tempfile::tempdir().expect("Failed to create temp dir");
        let target = out.path().join("build");
        let mut args = args(source.path(), &target);
        args.avro_driver = "missing_driver".to_string();

        let err = compile(&args).expect_err("Expected unknown driver failure");
        assert!(err.to_string().contains("missing_driver"));
        assert!(!target.exists());
    }
}
