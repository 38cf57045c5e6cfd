use anyhow::Result;

use listings::PropertyCatalog;

/// Look up a single kind; unknown names are reported as errors
pub fn execute(kind: &str) -> Result<()> {
    let property = PropertyCatalog::try_create_property(kind)?;
    println!("{}", property.describe());
    Ok(())
}
