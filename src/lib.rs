// SPDX-License-Identifier: MPL-2.0
//! `tafel` is a themeable, bilingual restaurant site template built with the
//! Iced GUI framework.
//!
//! A deployed site is described by a [`config::SiteConfig`]: one theme token
//! bundle, one section variant per role and the restaurant's data. The page
//! composes the configured variants in a fixed order and renders the same
//! content through whichever layouts were selected.

#![doc(html_root_url = "https://docs.rs/tafel/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod page;
pub mod sections;
pub mod theme;
pub mod ui;
