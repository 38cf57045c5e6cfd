use anyhow::Result;

use crate::cli::ui;
use listings::PropertyCatalog;

pub fn execute() -> Result<()> {
    ui::print_header("Property Kinds");
    for kind in PropertyCatalog::known_kinds() {
        let property = PropertyCatalog::create_kind(*kind);
        ui::print_result(kind.as_str(), property.describe());
    }
    Ok(())
}
