// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod inflection;
mod meta_box;
mod post_type;
mod taxonomy;
mod theme;

pub use inflection::*;
pub use meta_box::*;
pub use post_type::*;
pub use taxonomy::*;
pub use theme::*;
