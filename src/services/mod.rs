// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod form;
pub mod inflector;
pub mod meta_box;
pub mod registry;
pub mod theme;
