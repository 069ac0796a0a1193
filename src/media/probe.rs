use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::core::VideoSize;
use crate::foundation::error::{CropViewError, CropViewResult};
use crate::media::metadata::MetadataResolver;
use crate::media::video::VideoResource;

/// [`MetadataResolver`] backed by the system `ffprobe` binary.
///
/// Integer handles ([`VideoResource::Raw`]) are looked up in a resource table registered with
/// [`FfprobeResolver::with_raw_resource`]; paths are probed directly. Probing requires the
/// `media-ffmpeg` feature; without it every resolution fails with `MetadataUnavailable`.
#[derive(Clone, Debug)]
pub struct FfprobeResolver {
    program: PathBuf,
    raw_resources: BTreeMap<u32, PathBuf>,
}

impl Default for FfprobeResolver {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ffprobe"),
            raw_resources: BTreeMap::new(),
        }
    }
}

impl FfprobeResolver {
    /// Resolver invoking `ffprobe` from `PATH`, with an empty resource table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific `ffprobe` executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Register the file backing integer handle `id`.
    pub fn with_raw_resource(mut self, id: u32, path: impl Into<PathBuf>) -> Self {
        self.raw_resources.insert(id, path.into());
        self
    }

    /// The file that `video` refers to.
    pub fn source_path(&self, video: &VideoResource) -> CropViewResult<PathBuf> {
        match video {
            VideoResource::Path(p) => Ok(p.clone()),
            VideoResource::Raw(id) if *id != 0 => {
                self.raw_resources.get(id).cloned().ok_or_else(|| {
                    CropViewError::metadata_unavailable(format!(
                        "unknown raw resource handle {id}"
                    ))
                })
            }
            VideoResource::Raw(_) | VideoResource::Unset => Err(
                CropViewError::metadata_unavailable("no video resource configured"),
            ),
        }
    }
}

impl MetadataResolver for FfprobeResolver {
    #[tracing::instrument(skip(self))]
    fn resolve_dimensions(&self, video: &VideoResource) -> CropViewResult<VideoSize> {
        let path = self.source_path(video)?;
        probe_video_dimensions(&self.program, &path)
    }
}

/// Returns `true` if `program -version` runs successfully.
pub fn is_ffprobe_available(program: &Path) -> bool {
    std::process::Command::new(program)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(feature = "media-ffmpeg")]
fn probe_video_dimensions(program: &Path, source_path: &Path) -> CropViewResult<VideoSize> {
    let out = std::process::Command::new(program)
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=codec_type,width,height",
            "-print_format",
            "json",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| CropViewError::metadata_unavailable(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(CropViewError::metadata_unavailable(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let size = parse_ffprobe_dimensions(&out.stdout)?;
    tracing::debug!(path = %source_path.display(), %size, "probed video dimensions");
    Ok(size)
}

#[cfg(not(feature = "media-ffmpeg"))]
fn probe_video_dimensions(_program: &Path, _source_path: &Path) -> CropViewResult<VideoSize> {
    Err(CropViewError::metadata_unavailable(
        "probing video files requires the 'media-ffmpeg' feature",
    ))
}

/// Extract the first video stream's width/height from `ffprobe -print_format json` output.
pub fn parse_ffprobe_dimensions(json: &[u8]) -> CropViewResult<VideoSize> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        #[serde(default)]
        streams: Vec<ProbeStream>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json).map_err(|e| {
        CropViewError::metadata_unavailable(format!("ffprobe json parse failed: {e}"))
    })?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| CropViewError::metadata_unavailable("no video stream found"))?;
    let width = video_stream
        .width
        .ok_or_else(|| CropViewError::metadata_unavailable("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .ok_or_else(|| CropViewError::metadata_unavailable("missing video height from ffprobe"))?;

    VideoSize::new(width, height).map_err(CropViewError::into_metadata_unavailable)
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
