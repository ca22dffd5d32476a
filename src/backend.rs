// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Implementations of the GPU services used by the encoder.
//!
//! A backend provides memory, command submission and engine synchronization of a GPU. Only an
//! in-memory backend recording everything it is asked to do lives here, for the tests of this
//! crate.

#[cfg(test)]
pub(crate) mod dummy;
