//! Fixed-path generator invocation: reads `offline_schema.sql` from the
//! working directory and writes `offline_schema.cpp.include` beside it.

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    offline_schema_gen::runtime::run()?;
    Ok(())
}
