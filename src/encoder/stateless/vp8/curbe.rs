// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Kernel parameter blocks ("curbes") and the per-generation interface building them.

use byteorder::ByteOrder;
use byteorder::LittleEndian;

use crate::encoder::stateless::KernelId;
use crate::encoder::vp8::PictureParameters;
use crate::encoder::vp8::QuantData;
use crate::encoder::vp8::SequenceParameters;
use crate::encoder::FrameType;
use crate::encoder::KernelMode;

/// Who last wrote the curbe of a kernel during the current frame.
///
/// The BRC update kernel reads and rewrites the curbes of the MBEnc, MPU and TPU kernels, so
/// when it runs it prepares them first and the kernels themselves must then leave them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CurbeFreshness {
    /// Must be rebuilt before the kernel runs.
    #[default]
    Stale,
    /// Prepared by the BRC update wrapper for this frame.
    FreshFromBrcUpdate,
    /// Built by the kernel wrapper itself for this frame.
    FreshFromDirectSet,
}

impl CurbeFreshness {
    pub fn set_in_brc_update(self) -> bool {
        self == CurbeFreshness::FreshFromBrcUpdate
    }
}

/// State heap requirements of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelLayout {
    pub curbe_size: usize,
    pub binding_table_count: usize,
}

/// Little-endian DWORD array a curbe is assembled into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurbeWriter {
    dwords: Vec<u32>,
}

impl CurbeWriter {
    pub fn new(num_dwords: usize) -> Self {
        Self {
            dwords: vec![0; num_dwords],
        }
    }

    pub fn set(&mut self, dw: usize, value: u32) {
        self.dwords[dw] = value;
    }

    /// Sets the `width` bits field starting at bit `lsb` of DWORD `dw`. Excess bits of `value`
    /// are dropped.
    pub fn set_bits(&mut self, dw: usize, lsb: u32, width: u32, value: u32) {
        debug_assert!(lsb + width <= 32);
        let mask = if width == 32 {
            u32::MAX
        } else {
            ((1u32 << width) - 1) << lsb
        };
        self.dwords[dw] = (self.dwords[dw] & !mask) | ((value << lsb) & mask);
    }

    pub fn set_flag(&mut self, dw: usize, bit: u32, value: bool) {
        self.set_bits(dw, bit, 1, u32::from(value));
    }

    /// Copies `bytes` starting at DWORD `first_dw`, in memory order.
    pub fn set_bytes(&mut self, first_dw: usize, bytes: &[u8]) {
        for (i, chunk) in bytes.chunks(4).enumerate() {
            let mut dword = [0u8; 4];
            dword[..chunk.len()].copy_from_slice(chunk);
            self.dwords[first_dw + i] = LittleEndian::read_u32(&dword);
        }
    }

    pub fn get(&self, dw: usize) -> u32 {
        self.dwords[dw]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.dwords.len() * 4];
        LittleEndian::write_u32_into(&self.dwords, &mut bytes);
        bytes
    }
}

/// Binding table slots of the scaling kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingBindingTable {
    pub src_y: u32,
    pub dst_y: u32,
}

/// Binding table slots of the motion estimation kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeBindingTable {
    pub mv_data: u32,
    pub mv_data_16x: u32,
    pub distortion: u32,
    pub min_dist_brc: u32,
    pub inter_pred: u32,
    /// Generic reference slots, filled in the order of the set reference control bits.
    pub refs: [u32; 3],
}

/// Binding table slots of the three MBEnc kernels and the intra distortion pre-pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbEncBindingTable {
    pub per_mb_out: u32,
    pub curr_y: u32,
    pub curr_uv: u32,
    // Key frames.
    pub mb_mode_cost_luma: u32,
    pub block_mode_cost: u32,
    pub chroma_recon: u32,
    pub segmentation_map: u32,
    pub histogram: u32,
    pub i_vme_debug_streamout: u32,
    pub vme: u32,
    pub idist: u32,
    pub curr_y_downscaled: u32,
    pub vme_coarse_intra: u32,
    // Inter frames.
    pub mv_data_from_me: u32,
    pub ind_mv_data: u32,
    pub ref_mb_count: u32,
    pub inter_pred: u32,
    pub refs: [u32; 3],
    pub per_mb_quant: u32,
    pub inter_pred_distortion: u32,
    pub per_mv_data: u32,
    pub mode_cost_update: u32,
    pub p_vme_debug_streamout: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrcInitResetBindingTable {
    pub history: u32,
    pub distortion: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrcUpdateBindingTable {
    pub history: u32,
    pub pak_statistics: u32,
    pub encoder_cfg_read: u32,
    pub encoder_cfg_write: u32,
    pub mbenc_curbe_read: u32,
    pub mbenc_curbe_write: u32,
    pub distortion: u32,
    pub constant_data: u32,
    pub segment_map: u32,
    pub mpu_curbe_read: u32,
    pub mpu_curbe_write: u32,
    pub tpu_curbe_read: u32,
    pub tpu_curbe_write: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpuBindingTable {
    pub histogram: u32,
    pub ref_mode_probability: u32,
    pub curr_mode_probability: u32,
    pub ref_token_probability: u32,
    pub curr_token_probability: u32,
    pub header_bitstream: u32,
    pub header_metadata: u32,
    pub picture_state: u32,
    pub mpu_bitstream: u32,
    pub token_bits_data: u32,
    pub vme_debug_streamout: u32,
    pub entropy_cost: u32,
    pub mode_cost_update: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpuBindingTable {
    pub pak_token_statistics: u32,
    pub token_update_flags: u32,
    pub entropy_cost: u32,
    pub header_bitstream: u32,
    pub default_token_probability: u32,
    pub picture_state: u32,
    pub mpu_curbe_data: u32,
    pub header_metadata: u32,
    pub token_probability: u32,
    pub pak_hw_pass1_probability: u32,
    pub key_frame_token_probability: u32,
    pub updated_token_probability: u32,
    pub pak_hw_pass2_probability: u32,
    pub vme_debug_streamout: u32,
    pub repak_decision: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingTables {
    pub scaling: ScalingBindingTable,
    pub me: MeBindingTable,
    pub mbenc: MbEncBindingTable,
    pub brc_init_reset: BrcInitResetBindingTable,
    pub brc_update: BrcUpdateBindingTable,
    pub mpu: MpuBindingTable,
    pub tpu: TpuBindingTable,
}

pub struct ScalingCurbeParams {
    pub input_width: u32,
    pub input_height: u32,
}

pub struct MeCurbeParams {
    pub frame_width: u32,
    pub frame_height: u32,
    pub kernel_mode: KernelMode,
    /// 16x motion estimation runs for this frame.
    pub me_16x_enabled: bool,
    /// This invocation is the 16x pass.
    pub use_16x: bool,
    pub ref_frame_ctrl: u8,
}

pub struct MbEncCurbeParams<'a> {
    pub sequence: &'a SequenceParameters,
    pub picture: &'a PictureParameters,
    pub quant: &'a QuantData,
    pub frame_type: FrameType,
    pub kernel_mode: KernelMode,
    pub hme_enabled: bool,
    pub ref_frame_ctrl: u8,
    pub frame_position_in_gop: u32,
    pub average_key_frame_qp: u8,
    pub average_p_frame_qp: u8,
}

pub struct BrcInitResetCurbeParams<'a> {
    pub sequence: &'a SequenceParameters,
    pub picture: &'a PictureParameters,
    /// Macroblock aligned frame size.
    pub frame_width: u32,
    pub frame_height: u32,
    pub average_bit_rate: u32,
    pub max_bit_rate: u32,
    pub init_buf_full_in_bits: u32,
    pub buf_size_in_bits: u32,
    pub bps_ratio: f64,
    /// Max level ratio of each temporal layer, all zero for a single layer.
    pub max_level_ratios: [u32; 4],
}

pub struct BrcUpdateCurbeParams<'a> {
    pub sequence: &'a SequenceParameters,
    pub picture: &'a PictureParameters,
    pub quant: &'a QuantData,
    pub frame_type: FrameType,
    pub kernel_mode: KernelMode,
    pub ref_frame_ctrl: u8,
    pub target_size: u32,
    pub target_size_flag: bool,
    pub brc_pak_passes: u8,
    pub frame_width_in_mb: u32,
    pub frame_height_in_mb: u32,
}

pub struct MpuCurbeParams<'a> {
    pub sequence: &'a SequenceParameters,
    pub picture: &'a PictureParameters,
    pub quant: &'a QuantData,
    pub max_pak_passes: u8,
}

pub struct TpuCurbeParams<'a> {
    pub picture: &'a PictureParameters,
    pub quant: &'a QuantData,
    pub frame_width_in_mb: u32,
    pub frame_height_in_mb: u32,
    /// Entropy rebinarization of the frame header, only possible with a RePAK pass.
    pub rebinarization_frame_hdr: bool,
    /// Let the kernel decide whether the RePAK pass runs.
    pub adaptive_repak: bool,
    pub max_pak_passes: u8,
}

/// DWORDs of the TPU curbe patched with PAK statistics by the video engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpuPakStatsLayout {
    pub pak_pass_num: u32,
    pub cumulative_dq_index01: u32,
    pub cumulative_dq_index23: u32,
    pub cumulative_loop_filter01: u32,
    pub cumulative_loop_filter23: u32,
}

/// Builds the curbes of the encoding kernels for one hardware generation.
pub trait Vp8CurbeBuilder {
    fn kernel_layout(&self, kernel: KernelId) -> KernelLayout;

    fn binding_tables(&self) -> &BindingTables;

    fn tpu_pak_stats_layout(&self) -> TpuPakStatsLayout;

    fn scaling_curbe(&self, params: &ScalingCurbeParams) -> Vec<u8>;

    fn me_curbe(&self, params: &MeCurbeParams) -> Vec<u8>;

    fn mbenc_curbe(&self, params: &MbEncCurbeParams) -> Vec<u8>;

    fn brc_init_reset_curbe(&self, params: &BrcInitResetCurbeParams) -> Vec<u8>;

    fn brc_update_curbe(&self, params: &BrcUpdateCurbeParams) -> Vec<u8>;

    fn mpu_curbe(&self, params: &MpuCurbeParams) -> Vec<u8>;

    fn tpu_curbe(&self, params: &TpuCurbeParams) -> Vec<u8>;

    /// Constant data surface read by the BRC update kernel.
    fn brc_constant_data(&self) -> Vec<u8>;

    /// Luma mode cost and block mode cost tables of the key frame MBEnc kernels.
    fn mbenc_i_cost_tables(&self) -> (Vec<u8>, Vec<u8>);
}

/// Main reference selection for temporal layers: the references allowed by `ref_frame_ctrl`,
/// two bits each, in `first_ref`, `second_ref`, remaining order.
pub fn temporal_layer_main_ref(ref_frame_ctrl: u8, first_ref: u8, second_ref: u8) -> u32 {
    let order = [
        6u8.wrapping_sub(first_ref).wrapping_sub(second_ref),
        second_ref,
        first_ref,
    ];

    let mut main_ref = 0u32;
    let mut k = 0;
    for reference in order {
        if !(1..=3).contains(&reference) {
            continue;
        }

        if u32::from(ref_frame_ctrl) & (1 << (reference - 1)) != 0 {
            main_ref |= u32::from(reference) << (2 * k);
            k += 1;
        }
    }

    main_ref
}
