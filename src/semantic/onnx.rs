//! ONNX Runtime sentence-transformer backend (feature `onnx`).
//!
//! Downloads the model export and tokenizer through `hf-hub`, tokenizes with
//! `tokenizers`, runs the encoder with `ort`, then mean-pools the last hidden
//! state under the attention mask and L2-normalizes.

use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::EmbeddingConfig;

use super::normalize::l2_normalize;
use super::{Embedder, EmbeddingError};

const MODEL_FILE: &str = "onnx/model.onnx";
const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct OnnxEmbedder {
    session: Mutex<ort::session::Session>,
    tokenizer: tokenizers::Tokenizer,
    dimensions: usize,
}

impl OnnxEmbedder {
    /// Download (or reuse cached) model files and open an inference session.
    pub fn load(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let (model_path, tokenizer_path) = download_model(config)?;
        info!(model = %model_path.display(), "loading ONNX model");

        let mut tokenizer = tokenizers::Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| EmbeddingError::ModelInit(format!("tokenizer load: {e}")))?;
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: config.max_tokens,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::Config(format!("tokenizer truncation: {e}")))?;
        tokenizer.with_padding(Some(tokenizers::PaddingParams::default()));

        let session = ort::session::Session::builder()
            .map_err(|e| EmbeddingError::ModelInit(format!("session builder: {e}")))?
            .with_log_level(ort::logging::LogLevel::Warning)
            .map_err(|e| EmbeddingError::ModelInit(format!("log level: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| EmbeddingError::ModelInit(format!("model load: {e}")))?;

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions: config.dimensions,
        })
    }

    fn run(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| EmbeddingError::Inference(format!("tokenize: {e}")))?;

        let batch = encodings.len();
        let seq_len = encodings.iter().map(|e| e.get_ids().len()).max().unwrap_or(0);
        if seq_len == 0 {
            return Err(EmbeddingError::Inference("empty tokenization".into()));
        }

        let mut input_ids = vec![0i64; batch * seq_len];
        let mut attention_mask = vec![0i64; batch * seq_len];
        let mut token_type_ids = vec![0i64; batch * seq_len];
        for (i, encoding) in encodings.iter().enumerate() {
            let offset = i * seq_len;
            for (j, &id) in encoding.get_ids().iter().enumerate() {
                input_ids[offset + j] = i64::from(id);
            }
            for (j, &m) in encoding.get_attention_mask().iter().enumerate() {
                attention_mask[offset + j] = i64::from(m);
            }
            for (j, &t) in encoding.get_type_ids().iter().enumerate() {
                token_type_ids[offset + j] = i64::from(t);
            }
        }

        let shape = vec![batch as i64, seq_len as i64];
        let ids_tensor = ort::value::Tensor::from_array((shape.clone(), input_ids))
            .map_err(|e| EmbeddingError::Inference(format!("input_ids tensor: {e}")))?;
        let mask_tensor = ort::value::Tensor::from_array((shape.clone(), attention_mask.clone()))
            .map_err(|e| EmbeddingError::Inference(format!("attention_mask tensor: {e}")))?;
        let type_tensor = ort::value::Tensor::from_array((shape, token_type_ids))
            .map_err(|e| EmbeddingError::Inference(format!("token_type_ids tensor: {e}")))?;

        let mut session = self.session.lock();
        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor
            ])
            .map_err(|e| EmbeddingError::Inference(format!("inference: {e}")))?;

        let (out_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| EmbeddingError::Inference(format!("extract tensor: {e}")))?;
        let dims: Vec<usize> = out_shape.iter().map(|&d| d as usize).collect();
        if dims.len() != 3 || dims[0] != batch {
            return Err(EmbeddingError::Inference(format!(
                "unexpected output shape: {dims:?}"
            )));
        }
        let (out_seq, hidden) = (dims[1], dims[2]);
        if hidden != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: hidden,
            });
        }

        let pooled = (0..batch)
            .map(|i| {
                let mask = &attention_mask[i * seq_len..(i + 1) * seq_len];
                mean_pool(&data[i * out_seq * hidden..(i + 1) * out_seq * hidden], mask, hidden)
            })
            .collect();
        debug!(batch, seq_len, "embedded batch");
        Ok(pooled)
    }
}

/// Average token vectors whose mask is set, then L2-normalize.
fn mean_pool(tokens: &[f32], mask: &[i64], hidden: usize) -> Vec<f32> {
    let mut sum = vec![0.0f32; hidden];
    let mut kept = 0usize;
    for (j, token) in tokens.chunks_exact(hidden).enumerate() {
        if mask.get(j).copied().unwrap_or(0) == 0 {
            continue;
        }
        kept += 1;
        for (acc, x) in sum.iter_mut().zip(token) {
            *acc += x;
        }
    }
    if kept > 0 {
        for acc in sum.iter_mut() {
            *acc /= kept as f32;
        }
    }
    l2_normalize(&mut sum);
    sum
}

fn download_model(config: &EmbeddingConfig) -> Result<(PathBuf, PathBuf), EmbeddingError> {
    let mut builder = hf_hub::api::sync::ApiBuilder::new();
    if let Some(dir) = &config.cache_dir {
        builder = builder.with_cache_dir(PathBuf::from(dir));
    }
    let api = builder
        .build()
        .map_err(|e| EmbeddingError::ModelInit(format!("hf-hub api: {e}")))?;
    let repo = api.model(config.model.clone());

    let model_path = repo
        .get(MODEL_FILE)
        .map_err(|e| EmbeddingError::ModelInit(format!("model download ({MODEL_FILE}): {e}")))?;
    let tokenizer_path = repo
        .get(TOKENIZER_FILE)
        .map_err(|e| EmbeddingError::ModelInit(format!("tokenizer download: {e}")))?;
    Ok((model_path, tokenizer_path))
}

impl Embedder for OnnxEmbedder {
    fn name(&self) -> &str {
        "onnx"
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.run(&[text])?
            .pop()
            .ok_or_else(|| EmbeddingError::Inference("no embedding produced".into()))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.run(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_pool_ignores_padding() {
        let tokens = [1.0, 0.0, 3.0, 0.0, 100.0, 100.0];
        let pooled = mean_pool(&tokens, &[1, 1, 0], 2);
        assert!((pooled[0] - 1.0).abs() < 1e-6);
        assert_eq!(pooled[1], 0.0);
    }
}
