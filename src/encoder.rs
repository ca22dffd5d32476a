// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub mod stateless;
pub mod vp8;

use enumn::N;

/// Rate control method requested by the client, using the driver interface values.
#[derive(N, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum RateControlMethod {
    /// The encoder shall maintain the constant bitrate
    Cbr = 1,
    /// The encoder shall keep the average bitrate, allowing peaks up to the maximum bitrate
    Vbr = 2,
    /// Quantizer indices are provided by the client for every frame
    Cqp = 3,
}

impl RateControlMethod {
    /// Whether the bitrate control kernels have to run.
    pub fn is_brc(self) -> bool {
        matches!(self, RateControlMethod::Cbr | RateControlMethod::Vbr)
    }
}

impl Default for RateControlMethod {
    fn default() -> Self {
        RateControlMethod::Cqp
    }
}

/// Kernel flavour selected from the target usage of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelMode {
    Quality,
    Normal,
    Performance,
}

impl KernelMode {
    const TARGET_USAGE_MAP: [KernelMode; 8] = [
        KernelMode::Normal,
        KernelMode::Quality,
        KernelMode::Quality,
        KernelMode::Normal,
        KernelMode::Normal,
        KernelMode::Normal,
        KernelMode::Performance,
        KernelMode::Performance,
    ];

    /// Maps a target usage (0 to 7, higher bits ignored) to the kernel flavour.
    pub fn from_target_usage(target_usage: u8) -> Self {
        Self::TARGET_USAGE_MAP[usize::from(target_usage & 0x7)]
    }
}

/// Coding type of a VP8 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Key frame
    Intra,
    /// Inter frame predicted from up to three references
    Inter,
}

impl FrameType {
    pub fn is_intra(self) -> bool {
        self == FrameType::Intra
    }
}

/// Which halves of the pipeline this encoder instance is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecFunction {
    /// GPU kernels only
    Enc,
    /// Bitstream packing only
    Pak,
    /// Both kernels and bitstream packing
    EncPak,
}

impl CodecFunction {
    pub fn enc_enabled(self) -> bool {
        self != CodecFunction::Pak
    }

    pub fn pak_enabled(self) -> bool {
        self != CodecFunction::Enc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_usage_mapping() {
        assert_eq!(KernelMode::from_target_usage(0), KernelMode::Normal);
        assert_eq!(KernelMode::from_target_usage(1), KernelMode::Quality);
        assert_eq!(KernelMode::from_target_usage(2), KernelMode::Quality);
        assert_eq!(KernelMode::from_target_usage(4), KernelMode::Normal);
        assert_eq!(KernelMode::from_target_usage(6), KernelMode::Performance);
        assert_eq!(KernelMode::from_target_usage(7), KernelMode::Performance);
        // Only the low three bits are significant.
        assert_eq!(KernelMode::from_target_usage(9), KernelMode::Quality);
    }

    #[test]
    fn test_rate_control_method_values() {
        assert_eq!(RateControlMethod::n(1), Some(RateControlMethod::Cbr));
        assert_eq!(RateControlMethod::n(2), Some(RateControlMethod::Vbr));
        assert_eq!(RateControlMethod::n(3), Some(RateControlMethod::Cqp));
        assert_eq!(RateControlMethod::n(0), None);
        assert!(RateControlMethod::Cbr.is_brc());
        assert!(RateControlMethod::Vbr.is_brc());
        assert!(!RateControlMethod::Cqp.is_brc());
    }
}
