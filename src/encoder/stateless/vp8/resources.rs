// Copyright 2024 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! GPU buffers and surfaces owned by an encoding session.

use log::debug;
use log::error;

use crate::encoder::stateless::vp8::curbe::Vp8CurbeBuilder;
use crate::encoder::stateless::vp8::params::SequenceGeometry;
use crate::encoder::stateless::vp8::params::BRC_MAXIMUM_NUM_PASSES;
use crate::encoder::stateless::vp8::status::STATUS_BUFFER_SIZE;
use crate::encoder::stateless::vp8::tables::COEFF_UPDATE_PROBS;
use crate::encoder::stateless::vp8::tables::DEFAULT_COEFF_PROBS;
use crate::encoder::stateless::vp8::tables::ENTROPY_COST;
use crate::encoder::stateless::vp8::tables::PAK_QP_INPUT_TABLE;
use crate::encoder::stateless::vp8::tables::PROBABILITY_UPDATE_FLAGS;
use crate::encoder::stateless::EncodeResult;
use crate::encoder::stateless::StatelessBackendResult;
use crate::encoder::stateless::StatelessVP8EncoderBackend;
use crate::encoder::vp8::EncoderConfig;
use crate::utils::align_up;

pub const HISTOGRAM_SIZE: usize = 136 * 4;
pub const BRC_HISTORY_BUFFER_SIZE: usize = 704;
pub const INTERMEDIATE_PARTITION0_SIZE: usize = 64 * 1024;
pub const TOKEN_STATISTICS_SIZE: usize = 304 * 4;
pub const COEFF_PROBS_SIZE: usize = 1056;
pub const MODE_PROBS_SIZE: usize = 96;
pub const ENTROPY_COST_TABLE_SIZE: usize = 256 * 4;
pub const TOKEN_BITS_DATA_SIZE: usize = 16 * 4;
pub const REPAK_DECISION_SIZE: usize = 16;
pub const HEADER_METADATA_SIZE: usize = 32 * 4;
pub const PICTURE_STATE_CMD_SIZE: usize = 37 * 4;
pub const PICTURE_STATE_SIZE: usize = PICTURE_STATE_CMD_SIZE + HEADER_METADATA_SIZE + 16 * 4;
/// Where the encoder configuration command lives in the picture state buffer.
pub const HEADER_METADATA_OFFSET: usize = PICTURE_STATE_CMD_SIZE + 3 * 4;
pub const MPU_BITSTREAM_SIZE: usize = 128;
pub const TPU_BITSTREAM_SIZE: usize = 1344;
pub const MODE_COST_UPDATE_SIZE: usize = 16 * 4;
pub const BRC_CONSTANT_DATA_SIZE: usize = 2880;
pub const FRAME_HEADER_SIZE: usize = 4096;
pub const CACHELINE_SIZE: u32 = 64;
pub const PAGE_SIZE: u32 = 0x1000;
pub const BRC_IMG_STATE_SIZE_PER_PASS: usize = 128;
pub const ENCODER_CFG_BUFFER_SIZE: usize =
    BRC_IMG_STATE_SIZE_PER_PASS * BRC_MAXIMUM_NUM_PASSES as usize;
pub const BRC_PAK_STATISTICS_SIZE: usize = 64;
/// DWORD slots per pass of the PAK statistics snapshots.
pub const PAK_STATS_DUMP_DWORDS: usize = 12;
pub const REF_MB_COUNT_SIZE: usize = 32;
/// Bytes of PAK object commands per macroblock.
const MB_CODE_SIZE_PER_MB: u32 = 16 * 4;
/// Bytes of motion vectors per macroblock.
const MV_SIZE_PER_MB: u32 = 16 * 4;

/// Layout of the per-macroblock PAK object buffer: PAK commands first, motion vectors from
/// `mv_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbCodeLayout {
    pub mv_offset: u32,
    pub size: u32,
}

impl MbCodeLayout {
    pub fn new(num_mbs: u32) -> Self {
        let mv_offset = align_up(num_mbs * MB_CODE_SIZE_PER_MB, PAGE_SIZE);
        Self {
            mv_offset,
            size: mv_offset + num_mbs * MV_SIZE_PER_MB,
        }
    }
}

/// Size of the intermediate buffer of the bitstream packer: token partitions followed by the
/// first partition.
pub fn intermediate_buffer_size(geometry: &SequenceGeometry) -> usize {
    let pixels = (geometry.frame_width * geometry.frame_height) as usize;
    pixels * 2 + pixels / 4 + INTERMEDIATE_PARTITION0_SIZE
}

/// Pitch and height of the BRC distortion surface.
pub fn brc_distortion_dimensions(geometry: &SequenceGeometry) -> (u32, u32) {
    (
        align_up(geometry.downscaled_width_in_mb_4x * 8, 64),
        2 * align_up(geometry.downscaled_height_in_mb_4x * 4, 8),
    )
}

/// Keeps track of what was allocated so a failure releases everything obtained so far.
struct Allocator<'a, B: StatelessVP8EncoderBackend> {
    backend: &'a mut B,
    allocated: Vec<B::Resource>,
}

impl<'a, B: StatelessVP8EncoderBackend> Allocator<'a, B> {
    fn buffer(&mut self, name: &'static str, size: usize) -> StatelessBackendResult<B::Resource> {
        let resource = self.backend.allocate_buffer(name, size).map_err(|e| {
            error!("failed to allocate {}: {}", name, e);
            e
        })?;
        self.allocated.push(resource.clone());
        Ok(resource)
    }

    fn surface(
        &mut self,
        name: &'static str,
        width: u32,
        height: u32,
    ) -> StatelessBackendResult<B::Resource> {
        let resource = self
            .backend
            .allocate_surface(name, width, height)
            .map_err(|e| {
                error!("failed to allocate {}: {}", name, e);
                e
            })?;
        self.allocated.push(resource.clone());
        Ok(resource)
    }

    fn release(self) {
        for resource in self.allocated {
            self.backend.free_resource(resource);
        }
    }
}

/// Buffers read and written by the MPU and TPU kernels and the bitstream packer.
#[derive(Debug)]
pub struct MpuTpuBuffers<R> {
    pub mode_probs: R,
    pub ref_mode_probs: R,
    /// Token probabilities of the current frame.
    pub coeff_probs: R,
    /// Token probabilities of the reference frame, also used by the first PAK pass.
    pub ref_coeff_probs: R,
    pub token_bits_data: R,
    pub picture_state: R,
    pub mpu_bitstream: R,
    pub tpu_bitstream: R,
    pub entropy_cost_table: R,
    pub pak_token_statistics: R,
    pub pak_token_update_flags: R,
    pub default_token_probability: R,
    pub key_frame_token_probability: R,
    pub updated_token_probability: R,
    pub hw_token_probability_pass2: R,
    pub repak_decision: R,
}

/// State of the bitrate control kept across frames.
#[derive(Debug)]
pub struct BrcBuffers<R> {
    pub history: R,
    /// Segment map written by the BRC update kernel.
    pub segment_map: R,
    pub pak_statistics: R,
    /// Encoder configuration of every BRC pass, read and patched in place by the update kernel.
    pub encoder_cfg_write: R,
    pub constant_data: Option<R>,
    /// Intra distortion of key frames, only with `brc_distortion_buffer_supported`.
    pub distortion: Option<R>,
    pub pak_stats_before_dump: R,
    pub pak_stats_after_dump: R,
}

#[derive(Debug)]
pub struct Vp8Resources<R> {
    pub mb_code: R,
    pub mb_code_layout: MbCodeLayout,
    pub ref_mb_count: R,
    pub mb_mode_cost_luma: R,
    pub block_mode_cost: R,
    pub chroma_recon: R,
    pub per_mb_quant: R,
    pub pred_mv_data: R,
    pub mode_cost_update: R,
    pub histogram: R,

    pub me_4x_mv_data: Option<R>,
    pub me_4x_distortion: Option<R>,
    pub me_16x_mv_data: Option<R>,

    pub brc: BrcBuffers<R>,
    pub mpu_tpu: MpuTpuBuffers<R>,

    pub intra_row_store: R,
    pub frame_header: R,
    pub intermediate: R,
    pub pak_qp_input_table: R,

    pub status: R,
}

impl<R: Clone> Vp8Resources<R> {
    /// Allocates every resource of a session of the given geometry and uploads the constant
    /// tables.
    pub fn allocate<B, C>(
        backend: &mut B,
        builder: &C,
        config: &EncoderConfig,
        geometry: &SequenceGeometry,
    ) -> EncodeResult<Self>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
        C: Vp8CurbeBuilder,
    {
        let mut allocator = Allocator {
            backend,
            allocated: Vec::new(),
        };

        match Self::allocate_all(&mut allocator, config, geometry) {
            Ok(resources) => {
                let backend = allocator.backend;
                if let Err(e) = resources.upload_tables(backend, builder) {
                    resources.free(backend);
                    return Err(e);
                }
                debug!(
                    "allocated resources for {}x{}",
                    geometry.frame_width, geometry.frame_height
                );
                Ok(resources)
            }
            Err(e) => {
                allocator.release();
                Err(e.into())
            }
        }
    }

    fn allocate_all<B>(
        alloc: &mut Allocator<B>,
        config: &EncoderConfig,
        geometry: &SequenceGeometry,
    ) -> StatelessBackendResult<Self>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        let num_mbs = geometry.num_mbs();
        let mb_code_layout = MbCodeLayout::new(num_mbs);
        let w4x = geometry.downscaled_width_in_mb_4x;
        let h4x = geometry.downscaled_height_in_mb_4x;

        let mb_code = alloc.buffer("MB code buffer", mb_code_layout.size as usize)?;
        let ref_mb_count = alloc.buffer("Reference frame MB count", REF_MB_COUNT_SIZE)?;
        let mb_mode_cost_luma = alloc.surface("MB mode cost luma", align_up(2 * 10, 64), 1)?;
        let block_mode_cost = alloc.surface("Block mode cost", align_up(2 * 10 * 10 * 10, 64), 1)?;
        let chroma_recon = alloc.buffer("Chroma recon buffer", 64 * num_mbs as usize)?;
        let per_mb_quant = alloc.surface(
            "Per MB quant data",
            align_up(geometry.width_in_mb * 4, 64),
            geometry.height_in_mb,
        )?;
        let pred_mv_data = alloc.buffer("Per MV data", 4 * num_mbs as usize * 4)?;
        let mode_cost_update = alloc.buffer("Mode cost update", MODE_COST_UPDATE_SIZE)?;
        let histogram = alloc.buffer("Histogram", HISTOGRAM_SIZE)?;

        let (me_4x_mv_data, me_4x_distortion) = if config.hme_supported {
            (
                Some(alloc.surface("4xME MV data", w4x * 32, h4x * 4 * 4)?),
                Some(alloc.surface("4xME distortion", w4x * 8, h4x * 4 * 4)?),
            )
        } else {
            (None, None)
        };

        let me_16x_mv_data = if config.hme_supported && config.me_16x_supported {
            Some(alloc.surface(
                "16xME MV data",
                align_up(geometry.downscaled_width_in_mb_16x * 32, 64),
                geometry.downscaled_height_in_mb_16x * 4 * 3,
            )?)
        } else {
            None
        };

        let dump_size = usize::from(BRC_MAXIMUM_NUM_PASSES) * 4 * PAK_STATS_DUMP_DWORDS;
        let brc = BrcBuffers {
            history: alloc.buffer("BRC history", BRC_HISTORY_BUFFER_SIZE)?,
            segment_map: alloc.surface(
                "BRC segment map",
                align_up(geometry.width_in_mb, 4),
                geometry.height_in_mb,
            )?,
            pak_statistics: alloc.buffer("BRC PAK statistics", BRC_PAK_STATISTICS_SIZE)?,
            encoder_cfg_write: alloc.buffer("Encoder CFG write", ENCODER_CFG_BUFFER_SIZE)?,
            constant_data: if config.brc_constant_buffer_supported {
                Some(alloc.buffer("BRC constant data", BRC_CONSTANT_DATA_SIZE)?)
            } else {
                None
            },
            distortion: if config.brc_distortion_buffer_supported {
                let (width, height) = brc_distortion_dimensions(geometry);
                Some(alloc.surface("BRC distortion", width, height)?)
            } else {
                None
            },
            pak_stats_before_dump: alloc.buffer("BRC PAK statistics dump", dump_size)?,
            pak_stats_after_dump: alloc.buffer("BRC PAK statistics init dump", dump_size)?,
        };

        let mpu_tpu = MpuTpuBuffers {
            mode_probs: alloc.buffer("Mode probs", MODE_PROBS_SIZE)?,
            ref_mode_probs: alloc.buffer("Ref mode probs", MODE_PROBS_SIZE)?,
            coeff_probs: alloc.buffer("Coeff probs", COEFF_PROBS_SIZE)?,
            ref_coeff_probs: alloc.buffer("Ref coeff probs", COEFF_PROBS_SIZE)?,
            token_bits_data: alloc.buffer("Token bits data", TOKEN_BITS_DATA_SIZE)?,
            picture_state: alloc.buffer("Picture state", PICTURE_STATE_SIZE)?,
            mpu_bitstream: alloc.buffer("MPU bitstream", MPU_BITSTREAM_SIZE)?,
            tpu_bitstream: alloc.buffer("TPU bitstream", TPU_BITSTREAM_SIZE)?,
            entropy_cost_table: alloc.buffer("Entropy cost table", ENTROPY_COST_TABLE_SIZE)?,
            pak_token_statistics: alloc.buffer("PAK token statistics", TOKEN_STATISTICS_SIZE)?,
            pak_token_update_flags: alloc.buffer("PAK token update flags", COEFF_PROBS_SIZE)?,
            default_token_probability: alloc
                .buffer("Default token probability", COEFF_PROBS_SIZE)?,
            key_frame_token_probability: alloc
                .buffer("Key frame token probability", COEFF_PROBS_SIZE)?,
            updated_token_probability: alloc
                .buffer("Updated token probability", COEFF_PROBS_SIZE)?,
            hw_token_probability_pass2: alloc
                .buffer("HW token probability PAK pass 2", COEFF_PROBS_SIZE)?,
            repak_decision: alloc.buffer("TPU RePAK decision", REPAK_DECISION_SIZE)?,
        };

        Ok(Self {
            mb_code,
            mb_code_layout,
            ref_mb_count,
            mb_mode_cost_luma,
            block_mode_cost,
            chroma_recon,
            per_mb_quant,
            pred_mv_data,
            mode_cost_update,
            histogram,
            me_4x_mv_data,
            me_4x_distortion,
            me_16x_mv_data,
            brc,
            mpu_tpu,
            intra_row_store: alloc.buffer(
                "Intra row store scratch",
                (geometry.width_in_mb * CACHELINE_SIZE) as usize,
            )?,
            frame_header: alloc.buffer("Frame header", FRAME_HEADER_SIZE)?,
            intermediate: alloc.buffer("Intermediate buffer", intermediate_buffer_size(geometry))?,
            pak_qp_input_table: alloc.buffer("PAK QP input table", PAK_QP_INPUT_TABLE.len() * 2)?,
            status: alloc.buffer("Encode status", STATUS_BUFFER_SIZE)?,
        })
    }

    /// Initial contents of the probability buffers and the constant tables.
    fn upload_tables<B, C>(&self, backend: &mut B, builder: &C) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
        C: Vp8CurbeBuilder,
    {
        let mpu_tpu = &self.mpu_tpu;

        backend.fill_resource(&mpu_tpu.mode_probs, 0, MODE_PROBS_SIZE, 0)?;
        backend.fill_resource(&mpu_tpu.ref_mode_probs, 0, MODE_PROBS_SIZE, 0)?;
        backend.write_resource(&mpu_tpu.ref_coeff_probs, 0, &DEFAULT_COEFF_PROBS)?;

        let mut entropy_cost = Vec::with_capacity(ENTROPY_COST.len() * 2);
        for cost in ENTROPY_COST {
            entropy_cost.extend_from_slice(&cost.to_le_bytes());
        }
        backend.write_resource(&mpu_tpu.entropy_cost_table, 0, &entropy_cost)?;

        backend.write_resource(&mpu_tpu.pak_token_update_flags, 0, &PROBABILITY_UPDATE_FLAGS)?;
        backend.write_resource(&mpu_tpu.default_token_probability, 0, &COEFF_UPDATE_PROBS)?;
        backend.write_resource(&mpu_tpu.key_frame_token_probability, 0, &DEFAULT_COEFF_PROBS)?;
        backend.write_resource(&mpu_tpu.updated_token_probability, 0, &DEFAULT_COEFF_PROBS)?;

        let mut pak_qp_input = Vec::with_capacity(PAK_QP_INPUT_TABLE.len() * 2);
        for value in PAK_QP_INPUT_TABLE {
            pak_qp_input.extend_from_slice(&value.to_le_bytes());
        }
        backend.write_resource(&self.pak_qp_input_table, 0, &pak_qp_input)?;

        if let Some(constant_data) = &self.brc.constant_data {
            backend.write_resource(constant_data, 0, &builder.brc_constant_data())?;
        }

        Ok(())
    }

    /// Zeroes the BRC distortion surface before a kernel accumulates into it.
    pub fn clear_brc_distortion<B>(
        &self,
        backend: &mut B,
        geometry: &SequenceGeometry,
    ) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        if let Some(distortion) = &self.brc.distortion {
            let (width, height) = brc_distortion_dimensions(geometry);
            backend.fill_resource(distortion, 0, (width * height) as usize, 0)?;
        }

        Ok(())
    }

    /// Resets the probability buffers on a key frame.
    pub fn key_frame_update_mpu_tpu<B>(&self, backend: &mut B) -> EncodeResult<()>
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        let mpu_tpu = &self.mpu_tpu;

        let mut key_frame_probs = vec![0u8; COEFF_PROBS_SIZE];
        backend.read_resource(&mpu_tpu.key_frame_token_probability, 0, &mut key_frame_probs)?;
        backend.write_resource(&mpu_tpu.coeff_probs, 0, &key_frame_probs)?;

        backend.write_resource(&mpu_tpu.ref_coeff_probs, 0, &DEFAULT_COEFF_PROBS)?;
        backend.write_resource(&mpu_tpu.hw_token_probability_pass2, 0, &DEFAULT_COEFF_PROBS)?;
        backend.fill_resource(&mpu_tpu.repak_decision, 0, REPAK_DECISION_SIZE, 0)?;

        Ok(())
    }

    /// Releases every resource of the session.
    pub fn free<B>(self, backend: &mut B)
    where
        B: StatelessVP8EncoderBackend<Resource = R>,
    {
        let Self {
            mb_code,
            ref_mb_count,
            mb_mode_cost_luma,
            block_mode_cost,
            chroma_recon,
            per_mb_quant,
            pred_mv_data,
            mode_cost_update,
            histogram,
            me_4x_mv_data,
            me_4x_distortion,
            me_16x_mv_data,
            brc,
            mpu_tpu,
            intra_row_store,
            frame_header,
            intermediate,
            pak_qp_input_table,
            status,
            ..
        } = self;

        let optional = [
            me_4x_mv_data,
            me_4x_distortion,
            me_16x_mv_data,
            brc.constant_data,
            brc.distortion,
        ];

        let resources = [
            mb_code,
            ref_mb_count,
            mb_mode_cost_luma,
            block_mode_cost,
            chroma_recon,
            per_mb_quant,
            pred_mv_data,
            mode_cost_update,
            histogram,
            brc.history,
            brc.segment_map,
            brc.pak_statistics,
            brc.encoder_cfg_write,
            brc.pak_stats_before_dump,
            brc.pak_stats_after_dump,
            mpu_tpu.mode_probs,
            mpu_tpu.ref_mode_probs,
            mpu_tpu.coeff_probs,
            mpu_tpu.ref_coeff_probs,
            mpu_tpu.token_bits_data,
            mpu_tpu.picture_state,
            mpu_tpu.mpu_bitstream,
            mpu_tpu.tpu_bitstream,
            mpu_tpu.entropy_cost_table,
            mpu_tpu.pak_token_statistics,
            mpu_tpu.pak_token_update_flags,
            mpu_tpu.default_token_probability,
            mpu_tpu.key_frame_token_probability,
            mpu_tpu.updated_token_probability,
            mpu_tpu.hw_token_probability_pass2,
            mpu_tpu.repak_decision,
            intra_row_store,
            frame_header,
            intermediate,
            pak_qp_input_table,
            status,
        ];

        for resource in resources.into_iter().chain(optional.into_iter().flatten()) {
            backend.free_resource(resource);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::Backend;
    use crate::encoder::stateless::vp8::gen9::Gen9CurbeBuilder;
    use crate::encoder::stateless::EncodeError;
    use crate::encoder::stateless::StatelessBackendError;
    use crate::Resolution;

    fn geometry() -> SequenceGeometry {
        SequenceGeometry::new(Resolution::from((320, 240)))
    }

    #[test]
    fn test_mb_code_layout() {
        let layout = MbCodeLayout::new(300);
        assert_eq!(layout.mv_offset, 20480);
        assert_eq!(layout.size, 20480 + 300 * 64);
    }

    #[test]
    fn test_picture_state_layout() {
        assert_eq!(PICTURE_STATE_SIZE, 148 + 128 + 64);
        assert_eq!(HEADER_METADATA_OFFSET, 160);
        assert_eq!(ENCODER_CFG_BUFFER_SIZE, 512);
    }

    #[test]
    fn test_allocate_and_free() {
        let _ = env_logger::try_init();

        let mut backend = Backend::default();
        let resources = Vp8Resources::allocate(
            &mut backend,
            &Gen9CurbeBuilder,
            &EncoderConfig::default(),
            &geometry(),
        )
        .unwrap();

        assert_eq!(
            backend.resource_size(&resources.intermediate),
            Some(320 * 240 * 2 + 320 * 240 / 4 + 64 * 1024)
        );
        assert_eq!(
            backend.resource_size(&resources.intra_row_store),
            Some(20 * 64)
        );
        assert_eq!(
            backend.resource_data(&resources.mpu_tpu.key_frame_token_probability)[..],
            DEFAULT_COEFF_PROBS[..]
        );
        assert_eq!(
            backend.resource_data(&resources.mpu_tpu.default_token_probability)[..],
            COEFF_UPDATE_PROBS[..]
        );
        assert_eq!(
            backend.resource_data(resources.brc.constant_data.as_ref().unwrap()).len(),
            BRC_CONSTANT_DATA_SIZE
        );
        assert!(resources.me_16x_mv_data.is_some());

        resources.free(&mut backend);
        assert_eq!(backend.num_live_resources(), 0);
    }

    #[test]
    fn test_optional_resources() {
        let config = EncoderConfig {
            hme_supported: false,
            brc_distortion_buffer_supported: false,
            brc_constant_buffer_supported: false,
            ..Default::default()
        };

        let mut backend = Backend::default();
        let resources =
            Vp8Resources::allocate(&mut backend, &Gen9CurbeBuilder, &config, &geometry()).unwrap();
        assert!(resources.me_4x_mv_data.is_none());
        assert!(resources.me_16x_mv_data.is_none());
        assert!(resources.brc.distortion.is_none());
        assert!(resources.brc.constant_data.is_none());

        resources.free(&mut backend);
        assert_eq!(backend.num_live_resources(), 0);
    }

    #[test]
    fn test_allocation_failure_releases_everything() {
        let _ = env_logger::try_init();

        let mut backend = Backend::default();
        backend.fail_allocation_of("Picture state");

        let result = Vp8Resources::allocate(
            &mut backend,
            &Gen9CurbeBuilder,
            &EncoderConfig::default(),
            &geometry(),
        );
        assert!(matches!(
            result,
            Err(EncodeError::BackendError(
                StatelessBackendError::OutOfResources
            ))
        ));
        assert_eq!(backend.num_live_resources(), 0);
    }

    #[test]
    fn test_key_frame_update() {
        let mut backend = Backend::default();
        let resources = Vp8Resources::allocate(
            &mut backend,
            &Gen9CurbeBuilder,
            &EncoderConfig::default(),
            &geometry(),
        )
        .unwrap();

        backend
            .write_resource(&resources.mpu_tpu.key_frame_token_probability, 0, &[7; 16])
            .unwrap();
        backend
            .write_resource(&resources.mpu_tpu.repak_decision, 0, &[1; 4])
            .unwrap();

        resources.key_frame_update_mpu_tpu(&mut backend).unwrap();

        let coeff_probs = backend.resource_data(&resources.mpu_tpu.coeff_probs);
        assert_eq!(&coeff_probs[..16], &[7; 16]);
        assert_eq!(coeff_probs[16..], DEFAULT_COEFF_PROBS[16..]);
        assert_eq!(
            backend.resource_data(&resources.mpu_tpu.hw_token_probability_pass2)[..],
            DEFAULT_COEFF_PROBS[..]
        );
        assert_eq!(
            backend.resource_data(&resources.mpu_tpu.repak_decision),
            vec![0; REPAK_DECISION_SIZE]
        );
    }
}
