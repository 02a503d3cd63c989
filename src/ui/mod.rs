// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens and the notification components.

pub mod design_tokens;
pub mod notifications;
