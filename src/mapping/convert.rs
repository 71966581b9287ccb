// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Conversion entry point

use tracing::info;

use crate::error::{Result, ShiftError};
use crate::tree::Tree;

use super::mapper::PathPolicy;
use super::processor::MappingSpec;

/// Owner of a versioned configuration tree.
///
/// Version and tree are one logical unit: [`replace`](Self::replace) swaps
/// both together.
pub trait ConfigHolder {
    fn version(&self) -> u32;
    fn tree(&self) -> &Tree;
    fn replace(&mut self, version: u32, tree: Tree);
}

/// Convert `holder` from the spec's source version to its target version.
///
/// Nothing is written to the holder until the new tree is fully built, so
/// on any error it keeps its original version and tree.
pub fn convert<H>(spec: &MappingSpec, holder: &mut H, policy: PathPolicy) -> Result<()>
where
    H: ConfigHolder + ?Sized,
{
    let found = holder.version();
    if found != spec.source_version() {
        return Err(ShiftError::VersionMismatch {
            expected: spec.source_version(),
            found,
        });
    }

    let output = spec.process(holder.tree(), policy)?;
    holder.replace(spec.target_version(), output);

    info!(
        from = spec.source_version(),
        to = spec.target_version(),
        "Converted configuration"
    );
    Ok(())
}
