// src/audio.rs
//
// Reproducción de audio con rodio. Cualquier fallo (sin dispositivo,
// fichero ausente, decodificación) degrada a silencio con un aviso en
// el log; el flujo de pantallas nunca se bloquea por audio.

use log::{info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct AudioService {
    root: PathBuf,
    // El stream debe seguir vivo mientras suene algo.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
    sink: Option<Sink>,
}

impl AudioService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                root,
                _stream: Some(stream),
                handle: Some(handle),
                sink: None,
            },
            Err(err) => {
                warn!("Audio desactivado: {err}");
                Self::disabled(root)
            }
        }
    }

    /// Servicio mudo, para tests y para máquinas sin dispositivo.
    pub fn disabled(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            _stream: None,
            handle: None,
            sink: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.is_some()
    }

    /// Reproduce una pista una vez (ruta relativa a assets/).
    pub fn play(&mut self, rel: &str) {
        let path = self.root.join(rel);
        if let Err(err) = self.try_play(&path, false) {
            warn!("No se pudo reproducir {}: {err}", path.display());
        }
    }

    /// Reproduce en bucle (música de fondo).
    pub fn play_looped(&mut self, rel: &str) {
        let path = self.root.join(rel);
        if let Err(err) = self.try_play(&path, true) {
            warn!("No se pudo reproducir {}: {err}", path.display());
        }
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Voz en off: los .mp4 se pasan antes por ffmpeg para extraer la
    /// pista a .wav; el resto se reproduce directo.
    pub fn play_voice_over(&mut self, rel: &str) {
        if self.handle.is_none() {
            return;
        }
        let path = self.root.join(rel);
        let playable = if path.extension().and_then(|e| e.to_str()) == Some("mp4") {
            match convert_mp4_to_wav(&path) {
                Ok(wav) => wav,
                Err(err) => {
                    warn!("Sin voz para {}: {err}", path.display());
                    return;
                }
            }
        } else {
            path
        };
        if let Err(err) = self.try_play(&playable, false) {
            warn!("No se pudo reproducir {}: {err}", playable.display());
        }
    }

    fn try_play(&mut self, path: &Path, looped: bool) -> Result<(), Box<dyn Error>> {
        let Some(handle) = &self.handle else {
            return Ok(());
        };
        self.stop();
        let file = BufReader::new(File::open(path)?);
        let source = Decoder::new(file)?;
        let sink = Sink::try_new(handle)?;
        if looped {
            sink.append(source.repeat_infinite());
        } else {
            sink.append(source);
        }
        self.sink = Some(sink);
        Ok(())
    }
}

/// Extrae el audio de un MP4 a WAV con ffmpeg. El WAV se cachea junto
/// al fuente; si ffmpeg no está instalado la voz queda desactivada
/// para esa llamada.
fn convert_mp4_to_wav(mp4: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let wav = mp4.with_extension("wav");
    if wav.exists() {
        return Ok(wav);
    }
    let status = Command::new("ffmpeg")
        .arg("-i")
        .arg(mp4)
        .args(["-vn", "-acodec", "pcm_s16le", "-ar", "44100", "-ac", "2"])
        .arg(&wav)
        .arg("-y")
        .status()?;
    if !status.success() {
        return Err(format!("ffmpeg terminó con {status}").into());
    }
    info!("Convertido {} a {}", mp4.display(), wav.display());
    Ok(wav)
}
