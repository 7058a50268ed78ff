// SPDX-License-Identifier: MPL-2.0
//! Shared presentation layer: design tokens and theme-aware widget styles.

pub mod design_tokens;
pub mod styles;
