// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Orchestration of a dual-pipe VP8 hardware encoder.
//!
//! The encoder drives a set of GPU kernels (scaling, motion estimation, mode decision, bitrate
//! control and probability updates) on a render engine and the fixed-function bitstream packer
//! (PAK) on a video engine. The GPU itself is abstracted behind
//! [`encoder::stateless::StatelessVP8EncoderBackend`].

pub mod backend;
pub mod encoder;
pub mod utils;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Number of 16x16 macroblocks covering the width, rounding up.
    pub fn width_in_mbs(&self) -> u32 {
        utils::mbs_from_pixels(self.width)
    }

    /// Number of 16x16 macroblocks covering the height, rounding up.
    pub fn height_in_mbs(&self) -> u32 {
        utils::mbs_from_pixels(self.height)
    }

    /// Returns `self` with both dimensions rounded up to whole macroblocks.
    pub fn mb_aligned(&self) -> Self {
        Self {
            width: self.width_in_mbs() * utils::MB_SIZE,
            height: self.height_in_mbs() * utils::MB_SIZE,
        }
    }
}

impl From<(u32, u32)> for Resolution {
    fn from(value: (u32, u32)) -> Self {
        Self {
            width: value.0,
            height: value.1,
        }
    }
}
