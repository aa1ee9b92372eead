use crate::embed;
use crate::error::{GenError, GenResult};
use std::fs;
use std::path::Path;

/// Schema source consumed by the fixed invocation.
pub const SCHEMA_SQL: &str = "offline_schema.sql";

/// Generated header fragment produced by the fixed invocation.
pub const SCHEMA_INCLUDE: &str = "offline_schema.cpp.include";

/// Run one generation pass with the fixed filenames, relative to the current
/// working directory.
pub fn run() -> GenResult<()> {
    generate(SCHEMA_SQL, SCHEMA_INCLUDE)
}

/// Generate the embedded-schema fragment at `output` from the SQL source at
/// `input`, overwriting any existing file at `output`.
///
/// The source is read completely before the output path is touched, so a
/// missing or unreadable source never creates or truncates the output.
pub fn generate<P, Q>(input: P, output: Q) -> GenResult<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let sql = fs::read_to_string(input).map_err(|source| GenError::InputUnreadable {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "read {} schema lines from {}",
        sql.lines().count(),
        input.display()
    );

    let text = embed::render(&source_name(input), &sql);

    fs::write(output, &text).map_err(|source| GenError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote embedded schema to {}", output.display());

    Ok(())
}

/// Name the warning comment points at: the final component of the input path.
fn source_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}
