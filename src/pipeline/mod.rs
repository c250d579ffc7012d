//! OCR -> cipher -> reconstruct -> outputs.

use image::DynamicImage;
use tracing::info;

use crate::cipher::Encipherer;
use crate::ocr::OcrEngine;
use crate::output::PipelineOutput;
use crate::reconstructor::Reconstructor;

/// The image processing pipeline, wired from its four stages.
pub struct ImagePipeline {
    ocr: Box<dyn OcrEngine>,
    encipherer: Box<dyn Encipherer>,
    reconstructor: Reconstructor,
    outputs: Vec<Box<dyn PipelineOutput>>,
}

impl ImagePipeline {
    pub fn new(
        ocr: Box<dyn OcrEngine>,
        encipherer: Box<dyn Encipherer>,
        reconstructor: Reconstructor,
        outputs: Vec<Box<dyn PipelineOutput>>,
    ) -> Self {
        Self {
            ocr,
            encipherer,
            reconstructor,
            outputs,
        }
    }

    /// Feeds results forward through the stages, failing fast.
    ///
    /// Reconstruction of one image is an atomic unit of work: any stage
    /// failure aborts the run with no partial output.
    pub fn run(&self, image: &DynamicImage) -> crate::error::Result<()> {
        let recognized = self.ocr.recognize(image)?;
        info!(characters = recognized.len(), "recognition complete");

        let enciphered = self.encipherer.encipher(&recognized)?;

        let reconstructed = self.reconstructor.reconstruct(&enciphered, image)?;

        for output in &self.outputs {
            output.write(&reconstructed)?;
        }
        Ok(())
    }
}
