// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Utility functions used by several parts of this crate.
//!
//! This module is for anything that doesn't fit into the other top-level modules. Try not to add
//! new code here unless it really doesn't belong anywhere else.

use bytes::Buf;

/// Size in pixels of a macroblock side.
pub const MB_SIZE: u32 = 16;

/// Rounds `value` up to the next multiple of `alignment`, which must be a power of two.
pub fn align_up(value: u32, alignment: u32) -> u32 {
    debug_assert!(alignment.is_power_of_two());
    (value + alignment - 1) & !(alignment - 1)
}

/// Number of macroblocks needed to cover `pixels`.
pub fn mbs_from_pixels(pixels: u32) -> u32 {
    (pixels + MB_SIZE - 1) / MB_SIZE
}

/// Clamps `value` into `[low, high]`.
pub fn clip3<T: PartialOrd>(low: T, high: T, value: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Reads the little-endian DWORD at index `dword` of `data`, or `None` if `data` is too short.
pub fn read_dword(data: &[u8], dword: usize) -> Option<u32> {
    let mut cursor = data.get(dword * 4..)?;
    if cursor.remaining() < 4 {
        return None;
    }

    Some(cursor.get_u32_le())
}
