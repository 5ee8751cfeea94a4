// ABOUTME: Deterministic local text embedder over hashed token and trigram features
// ABOUTME: No model files, no network; identical input always embeds identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Packsmith Contributors

//! Fixed-dimension text embedding for identifier search.
//!
//! Word tokens capture whole-word matches ("gear" in `iron_gear`) while
//! character trigrams capture partial and misspelled matches ("gea").
//! Features hash into a fixed number of buckets and the vector is
//! L2-normalized, so cosine similarity reduces to a dot product.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Weight of a whole-token feature relative to a trigram feature
const TOKEN_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

/// Deterministic hashed-feature embedder with a fixed output dimension
#[derive(Debug, Clone)]
pub struct TokenEmbedder {
    dim: usize,
}

impl TokenEmbedder {
    /// Create an embedder producing `dim`-dimensional vectors.
    ///
    /// `dim` is clamped to at least 1; bucket hashing needs a nonzero
    /// modulus.
    #[must_use]
    pub const fn new(dim: usize) -> Self {
        Self {
            dim: if dim == 0 { 1 } else { dim },
        }
    }

    /// The output dimension
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.dim
    }

    /// Embed free text into an L2-normalized vector
    #[must_use]
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];
        for token in tokenize(text) {
            self.bump(&mut vector, &token, TOKEN_WEIGHT);
            let chars: Vec<char> = token.chars().collect();
            for trigram in chars.windows(3) {
                let gram: String = trigram.iter().collect();
                self.bump(&mut vector, &gram, TRIGRAM_WEIGHT);
            }
        }
        normalize(&mut vector);
        vector
    }

    fn bump(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let bucket = (fnv1a(feature.as_bytes()) % self.dim as u64) as usize;
        vector[bucket] += weight;
    }
}

/// Lowercased alphanumeric word tokens
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
}

fn normalize(vector: &mut [f32]) {
    let magnitude: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for v in vector.iter_mut() {
            *v /= magnitude;
        }
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Dot product of two equal-dimension vectors.
///
/// Both sides are normalized at construction, so this is the cosine
/// similarity.
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
