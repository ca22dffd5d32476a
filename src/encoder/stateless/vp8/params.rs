// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Translation of the client parameters into the geometry and per-frame decisions of the
//! encoder.

use log::debug;

use crate::encoder::stateless::EncodeError;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::vp8::PictureId;
use crate::encoder::vp8::PictureParameters;
use crate::encoder::vp8::QuantData;
use crate::encoder::vp8::ALT_REF_FLAG;
use crate::encoder::vp8::GOLDEN_REF_FLAG;
use crate::encoder::vp8::MAX_SEGMENTS;
use crate::encoder::vp8::QINDEX_Y1_DC;
use crate::encoder::FrameType;
use crate::encoder::KernelMode;
use crate::encoder::RateControlMethod;
use crate::utils::mbs_from_pixels;
use crate::utils::MB_SIZE;
use crate::Resolution;

pub const BRC_MINIMUM_NUM_PASSES: u8 = 2;
pub const BRC_DEFAULT_NUM_PASSES: u8 = 4;
pub const BRC_MAXIMUM_NUM_PASSES: u8 = 4;

/// Number of PAK passes run by a multi-pass bitrate control of the given precision.
pub fn num_brc_pak_passes(precision: u8) -> u8 {
    match precision {
        0 | 2 => BRC_DEFAULT_NUM_PASSES,
        1 => BRC_MINIMUM_NUM_PASSES,
        3 => BRC_MAXIMUM_NUM_PASSES,
        _ => {
            log::warn!("invalid BRC precision {}, using the default", precision);
            BRC_DEFAULT_NUM_PASSES
        }
    }
}

/// Macroblock grid of a sequence at full, 1/4 and 1/16 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceGeometry {
    /// Macroblock aligned frame size.
    pub frame_width: u32,
    pub frame_height: u32,
    pub width_in_mb: u32,
    pub height_in_mb: u32,
    pub downscaled_width_in_mb_4x: u32,
    pub downscaled_height_in_mb_4x: u32,
    pub downscaled_width_in_mb_16x: u32,
    pub downscaled_height_in_mb_16x: u32,
}

impl SequenceGeometry {
    pub fn new(resolution: Resolution) -> Self {
        let width_in_mb = resolution.width_in_mbs();
        let height_in_mb = resolution.height_in_mbs();
        let Resolution {
            width: frame_width,
            height: frame_height,
        } = resolution.mb_aligned();

        Self {
            frame_width,
            frame_height,
            width_in_mb,
            height_in_mb,
            downscaled_width_in_mb_4x: mbs_from_pixels(frame_width / 4),
            downscaled_height_in_mb_4x: mbs_from_pixels(frame_height / 4),
            downscaled_width_in_mb_16x: mbs_from_pixels(frame_width / 16),
            downscaled_height_in_mb_16x: mbs_from_pixels(frame_height / 16),
        }
    }

    pub fn num_mbs(&self) -> u32 {
        self.width_in_mb * self.height_in_mb
    }

    pub fn downscaled_width_4x(&self) -> u32 {
        self.downscaled_width_in_mb_4x * MB_SIZE
    }

    pub fn downscaled_height_4x(&self) -> u32 {
        self.downscaled_height_in_mb_4x * MB_SIZE
    }

    pub fn downscaled_width_16x(&self) -> u32 {
        self.downscaled_width_in_mb_16x * MB_SIZE
    }

    pub fn downscaled_height_16x(&self) -> u32 {
        self.downscaled_height_in_mb_16x * MB_SIZE
    }
}

/// Kernel flavour of a sequence and whether the 16x motion search stays available with it.
pub fn kernel_mode_for(target_usage: u8, me_16x_supported: bool) -> (KernelMode, bool) {
    let kernel_mode = KernelMode::from_target_usage(target_usage);
    let me_16x = me_16x_supported && kernel_mode != KernelMode::Performance;
    (kernel_mode, me_16x)
}

/// Whether a GOP is made of key frames only.
pub fn gop_is_idr_frame_only(gop_pic_size: u32) -> bool {
    gop_pic_size == 1
}

/// Average of the clipped luma DC quantizer index over the active segments.
pub fn average_qp(quant: &QuantData, segmentation_enabled: bool) -> u8 {
    if !segmentation_enabled {
        return quant.clipped_index(0, QINDEX_Y1_DC);
    }

    let sum: u32 = (0..MAX_SEGMENTS)
        .map(|segment| u32::from(quant.clipped_index(segment, QINDEX_Y1_DC)))
        .sum();
    (sum / MAX_SEGMENTS as u32) as u8
}

/// Position of an inter frame in its GOP, computed from the 1-based frame counter.
pub fn frame_position_in_gop(
    store_data: u32,
    gop_pic_size: u32,
    rate_control_method: RateControlMethod,
) -> EncodeResult<u32> {
    if gop_pic_size == 0 {
        // Without bitrate control the position only tunes the MBEnc kernel.
        if rate_control_method.is_brc() {
            return Err(EncodeError::InvalidParameter("GOP size of zero"));
        }
        return Ok(0);
    }

    Ok(store_data.saturating_sub(1) % gop_pic_size)
}

/// Reference control mask actually used for the frame.
///
/// For inter frames, references pointing at the same picture as a previous one are dropped,
/// then a client mask selecting a single reference wins over the optimized one.
pub fn collapse_ref_frame_ctrl(frame_type: FrameType, picture: &PictureParameters) -> u8 {
    let optimized = match frame_type {
        FrameType::Intra => 1,
        FrameType::Inter => {
            let last = picture.last_ref_pic;
            let golden = picture.golden_ref_pic;
            let alt = picture.alt_ref_pic;

            let mut flags = 0x07;
            if last == golden {
                flags &= !GOLDEN_REF_FLAG;
            }
            if last == alt || golden == alt {
                flags &= !ALT_REF_FLAG;
            }
            flags
        }
    };

    match picture.ref_frame_ctrl {
        0 | 1 | 2 | 4 => picture.ref_frame_ctrl,
        _ => optimized,
    }
}

/// Valid references of the current picture, in last, golden, alt order.
pub fn reference_pictures(picture: &PictureParameters) -> Vec<PictureId> {
    [
        picture.last_ref_pic,
        picture.golden_ref_pic,
        picture.alt_ref_pic,
    ]
    .into_iter()
    .filter(PictureId::is_valid)
    .collect()
}

/// Number of PAK passes of a frame and the position of the RePAK pass among them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassPolicy {
    /// Passes run in addition to the mandatory first one.
    pub num_passes: u8,
    pub min_pak_passes: u8,
    /// Index of the RePAK pass, zero when there is none.
    pub repak_pass_iter: u8,
    /// The kernels of this frame must wait for the PAK of the previous frame.
    pub wait_for_pak: bool,
}

pub struct PassPolicyInput {
    pub kernel_mode: KernelMode,
    pub repak_supported: bool,
    /// PAK passes of the bitrate control when multi-pass BRC runs for this frame.
    pub multipass_brc_passes: Option<u8>,
    pub frame_position_in_gop: u32,
    pub store_data: u32,
}

pub fn pass_policy(input: &PassPolicyInput) -> PassPolicy {
    let (mut num_passes, mut min_pak_passes, mut wait_for_pak) = match input.kernel_mode {
        KernelMode::Quality => (
            1,
            2,
            input.frame_position_in_gop >= 1 && input.repak_supported,
        ),
        KernelMode::Normal => (1, 2, input.repak_supported && input.store_data > 1),
        KernelMode::Performance => (0, 1, false),
    };

    if !input.repak_supported {
        num_passes = 0;
        min_pak_passes = 1;
        wait_for_pak = false;
    }

    if let Some(brc_passes) = input.multipass_brc_passes {
        num_passes += brc_passes.saturating_sub(1);
    }

    let repak_pass_iter = if input.repak_supported && min_pak_passes > 1 {
        num_passes
    } else {
        0
    };

    PassPolicy {
        num_passes,
        min_pak_passes,
        repak_pass_iter,
        wait_for_pak,
    }
}

/// Output of the picture state command: pre and post deblocking enables.
pub fn deblocking_outputs(version: u8, suppress_recon_pic: bool) -> (bool, bool) {
    let deblocking = matches!(version, 0 | 1);
    (
        !deblocking && !suppress_recon_pic,
        deblocking && !suppress_recon_pic,
    )
}

/// Logs the decisions taken for a frame.
pub(crate) fn log_policy(frame_type: FrameType, kernel_mode: KernelMode, policy: &PassPolicy) {
    debug!(
        "{:?} frame in {:?} mode: {} extra passes, min {} PAK passes, RePAK pass {}, wait for PAK {}",
        frame_type,
        kernel_mode,
        policy.num_passes,
        policy.min_pak_passes,
        policy.repak_pass_iter,
        policy.wait_for_pak
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_inputs() -> Vec<PassPolicyInput> {
        let mut inputs = Vec::new();
        for kernel_mode in [
            KernelMode::Quality,
            KernelMode::Normal,
            KernelMode::Performance,
        ] {
            for repak_supported in [false, true] {
                for multipass_brc_passes in [None, Some(2), Some(4)] {
                    for (frame_position_in_gop, store_data) in [(0, 1), (1, 2), (4, 5)] {
                        inputs.push(PassPolicyInput {
                            kernel_mode,
                            repak_supported,
                            multipass_brc_passes,
                            frame_position_in_gop,
                            store_data,
                        });
                    }
                }
            }
        }
        inputs
    }

    #[test]
    fn test_pass_policy_bounds() {
        for input in all_inputs() {
            let policy = pass_policy(&input);
            assert!(policy.min_pak_passes >= 1);
            assert!(policy.repak_pass_iter == 0 || policy.repak_pass_iter == policy.num_passes);
        }
    }

    #[test]
    fn test_pass_policy_without_repak() {
        for input in all_inputs()
            .into_iter()
            .filter(|input| !input.repak_supported && input.multipass_brc_passes.is_none())
        {
            let policy = pass_policy(&input);
            assert_eq!((policy.num_passes, policy.min_pak_passes), (0, 1));
            assert_eq!(policy.repak_pass_iter, 0);
            assert!(!policy.wait_for_pak);
        }
    }

    #[test]
    fn test_pass_policy_normal_p_frame() {
        let policy = pass_policy(&PassPolicyInput {
            kernel_mode: KernelMode::Normal,
            repak_supported: true,
            multipass_brc_passes: None,
            frame_position_in_gop: 4,
            store_data: 5,
        });

        assert_eq!(
            policy,
            PassPolicy {
                num_passes: 1,
                min_pak_passes: 2,
                repak_pass_iter: 1,
                wait_for_pak: true,
            }
        );
    }

    #[test]
    fn test_pass_policy_multipass_brc() {
        let policy = pass_policy(&PassPolicyInput {
            kernel_mode: KernelMode::Normal,
            repak_supported: true,
            multipass_brc_passes: Some(4),
            frame_position_in_gop: 0,
            store_data: 1,
        });
        assert_eq!(policy.num_passes, 4);
        assert_eq!(policy.repak_pass_iter, 4);
        assert!(!policy.wait_for_pak);

        let policy = pass_policy(&PassPolicyInput {
            kernel_mode: KernelMode::Performance,
            repak_supported: true,
            multipass_brc_passes: Some(2),
            frame_position_in_gop: 0,
            store_data: 3,
        });
        assert_eq!(policy.num_passes, 1);
        assert_eq!(policy.repak_pass_iter, 0);
    }

    #[test]
    fn test_quality_mode_waits_inside_gop() {
        let mut input = PassPolicyInput {
            kernel_mode: KernelMode::Quality,
            repak_supported: true,
            multipass_brc_passes: None,
            frame_position_in_gop: 0,
            store_data: 7,
        };
        assert!(!pass_policy(&input).wait_for_pak);

        input.frame_position_in_gop = 1;
        assert!(pass_policy(&input).wait_for_pak);
    }

    #[test]
    fn test_num_brc_pak_passes() {
        assert_eq!(num_brc_pak_passes(0), 4);
        assert_eq!(num_brc_pak_passes(1), 2);
        assert_eq!(num_brc_pak_passes(2), 4);
        assert_eq!(num_brc_pak_passes(3), 4);
        assert_eq!(num_brc_pak_passes(9), 4);
    }

    #[test]
    fn test_average_qp() {
        let quant = QuantData {
            q_index: [10, 20, 30, 40],
            q_index_delta: [5, 0, 0, 0, 0],
        };
        assert_eq!(average_qp(&quant, true), 30);
        assert_eq!(average_qp(&quant, false), 15);

        let quant = QuantData {
            q_index: [120, 126, 127, 0],
            q_index_delta: [10, 0, 0, 0, 0],
        };
        assert_eq!(average_qp(&quant, true), ((127u32 + 127 + 127 + 10) / 4) as u8);
    }

    #[test]
    fn test_gop_is_idr_frame_only() {
        assert!(gop_is_idr_frame_only(1));
        assert!(!gop_is_idr_frame_only(0));
        assert!(!gop_is_idr_frame_only(2));
        assert!(!gop_is_idr_frame_only(30));
    }

    #[test]
    fn test_frame_position_in_gop() {
        assert_eq!(
            frame_position_in_gop(5, 30, RateControlMethod::Cbr).unwrap(),
            4
        );
        assert_eq!(
            frame_position_in_gop(31, 30, RateControlMethod::Cqp).unwrap(),
            0
        );
        assert!(matches!(
            frame_position_in_gop(5, 0, RateControlMethod::Vbr),
            Err(EncodeError::InvalidParameter(_))
        ));
        assert_eq!(
            frame_position_in_gop(5, 0, RateControlMethod::Cqp).unwrap(),
            0
        );
    }

    #[test]
    fn test_geometry() {
        let geometry = SequenceGeometry::new(Resolution::from((1920, 1080)));
        assert_eq!(geometry.frame_width, 1920);
        assert_eq!(geometry.frame_height, 1088);
        assert_eq!((geometry.width_in_mb, geometry.height_in_mb), (120, 68));
        assert_eq!(
            (
                geometry.downscaled_width_in_mb_4x,
                geometry.downscaled_height_in_mb_4x
            ),
            (30, 17)
        );
        assert_eq!(
            (
                geometry.downscaled_width_in_mb_16x,
                geometry.downscaled_height_in_mb_16x
            ),
            (8, 5)
        );
        assert_eq!(geometry.num_mbs(), 120 * 68);
    }

    #[test]
    fn test_downscaled_geometry_covers_frame() {
        for (width, height) in [(16, 16), (176, 144), (320, 240), (1280, 720), (4096, 2160)] {
            let geometry = SequenceGeometry::new(Resolution::from((width, height)));
            for (scale, width_in_mb, height_in_mb) in [
                (
                    4,
                    geometry.downscaled_width_in_mb_4x,
                    geometry.downscaled_height_in_mb_4x,
                ),
                (
                    16,
                    geometry.downscaled_width_in_mb_16x,
                    geometry.downscaled_height_in_mb_16x,
                ),
            ] {
                assert!(width_in_mb * MB_SIZE * scale >= width);
                assert!(height_in_mb * MB_SIZE * scale >= height);
                assert_eq!(width_in_mb, mbs_from_pixels(geometry.frame_width / scale));
            }
        }
    }

    #[test]
    fn test_kernel_mode_disables_16x() {
        assert_eq!(kernel_mode_for(7, true), (KernelMode::Performance, false));
        assert_eq!(kernel_mode_for(4, true), (KernelMode::Normal, true));
        assert_eq!(kernel_mode_for(1, false), (KernelMode::Quality, false));
    }

    #[test]
    fn test_collapse_ref_frame_ctrl() {
        let mut picture = PictureParameters {
            last_ref_pic: PictureId(1),
            golden_ref_pic: PictureId(1),
            alt_ref_pic: PictureId(2),
            ref_frame_ctrl: 7,
            ..Default::default()
        };
        assert_eq!(collapse_ref_frame_ctrl(FrameType::Inter, &picture), 5);

        picture.alt_ref_pic = PictureId(1);
        assert_eq!(collapse_ref_frame_ctrl(FrameType::Inter, &picture), 1);

        picture.ref_frame_ctrl = 2;
        assert_eq!(collapse_ref_frame_ctrl(FrameType::Inter, &picture), 2);

        picture.ref_frame_ctrl = 0;
        assert_eq!(collapse_ref_frame_ctrl(FrameType::Inter, &picture), 0);

        picture.ref_frame_ctrl = 3;
        assert_eq!(collapse_ref_frame_ctrl(FrameType::Intra, &picture), 1);
    }

    #[test]
    fn test_collapse_ref_frame_ctrl_idempotent() {
        let ids = [PictureId(0), PictureId(1), PictureId(2)];
        for last in ids {
            for golden in ids {
                for alt in ids {
                    for ctrl in 0..8 {
                        let mut picture = PictureParameters {
                            last_ref_pic: last,
                            golden_ref_pic: golden,
                            alt_ref_pic: alt,
                            ref_frame_ctrl: ctrl,
                            ..Default::default()
                        };
                        let once = collapse_ref_frame_ctrl(FrameType::Inter, &picture);
                        picture.ref_frame_ctrl = once;
                        assert_eq!(collapse_ref_frame_ctrl(FrameType::Inter, &picture), once);
                    }
                }
            }
        }
    }

    #[test]
    fn test_reference_pictures() {
        let picture = PictureParameters {
            last_ref_pic: PictureId(3),
            golden_ref_pic: PictureId::INVALID,
            alt_ref_pic: PictureId(5),
            ..Default::default()
        };
        assert_eq!(
            reference_pictures(&picture),
            vec![PictureId(3), PictureId(5)]
        );
    }

    #[test]
    fn test_deblocking_outputs() {
        for version in 0..4 {
            let (pre, post) = deblocking_outputs(version, false);
            assert_ne!(pre, post);
            assert_eq!(post, version < 2);
            assert_eq!(deblocking_outputs(version, true), (false, false));
        }
    }
}
