use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# scriptrate configuration
#
# Every section is optional; omitted values use the defaults shown here.

[parallel]
# Score scenes on a worker pool
enabled = true
# max_concurrency = 4

[lexicon]
# Characters of context on each side of a keyword match
window_chars = 50
# Excerpts kept per category and scene (at most 5)
max_excerpts = 5
# Shorter excerpts are treated as noise and not counted
min_excerpt_chars = 10

# Document score = max_weight * max + percentile_weight * percentile(scene scores)
[aggregation.intensity]   # violence, gore
max_weight = 0.7
percentile_weight = 0.3
percentile = 95.0

[aggregation.peak]        # sex_act, nudity, child_risk
max_weight = 0.85
percentile_weight = 0.15
percentile = 90.0

[aggregation.frequency]   # profanity, drugs
max_weight = 0.0
percentile_weight = 1.0
percentile = 90.0

[ranking]
min_weight = 0.1
top_scenes = 5
sample_chars = 300

[ranking.weights]
violence = 0.5
gore = 0.8
sex_act = 0.9
nudity = 0.0
profanity = 0.3
drugs = 0.3
child_risk = 0.7

[embedding]
# "onnx" (default when built with the onnx feature) runs a sentence-transformer;
# "hashing" needs no model files but only sees shared words
# backend = "onnx"
dimensions = 384
model = "sentence-transformers/all-MiniLM-L6-v2"
max_tokens = 256
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to overwrite unless forced.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
