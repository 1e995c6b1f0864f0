use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::BrickscaleResult;

pub fn ensure_parent_dir(path: &Path) -> BrickscaleResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
