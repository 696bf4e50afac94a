// Copyright 2025 the Markup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::RenderError;

/// Errors raised while applying an action.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The action was rejected before anything was committed, e.g. for a range outside the
    /// text or a tag of the wrong kind.
    #[error(transparent)]
    Edit(#[from] markup_model::Error),

    /// The renderer failed to show a committed state.
    ///
    /// The state stays committed; the caller is expected to recover, typically by rendering
    /// the current state from scratch.
    #[error("renderer failed: {source}")]
    Render {
        /// What the renderer reported.
        #[source]
        source: RenderError,
    },
}
