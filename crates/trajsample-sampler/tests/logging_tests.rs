//! Each `sample` call reports itself through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use trajsample_sampler::prelude::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut out) = self.0.lock() {
            out.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|out| String::from_utf8_lossy(&out).into_owned())
            .unwrap_or_default()
    }
}

#[test]
fn test_sample_emits_debug_event() -> Result<(), CurveError> {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let sampler = PiecewiseQuinticSampler::new(10.0, 2, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    let set = tracing::subscriber::with_default(subscriber, || {
        sampler.sample(KinematicState1D::default(), SampleMode::Lazy)
    })?;
    assert_eq!(set.len(), 30);

    let logs = capture.contents();
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("piecewise_quintic"), "{logs}");
    assert!(logs.contains("candidates=30"), "{logs}");
    assert!(logs.contains("mode=Lazy"), "{logs}");
    Ok(())
}
