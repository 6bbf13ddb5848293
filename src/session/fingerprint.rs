use crate::transform::state::TransformState;
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5f3a_91c4_e26d_07b8;

/// Stable fingerprint of everything a compositing pass reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SnapshotFingerprint {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

/// Identity of the render inputs held by a session.
///
/// Assets are identified by the revision of the slot that holds them rather than by their
/// pixels: a slot's revision changes every time its value is replaced, and only then.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SnapshotKey<'a> {
    pub(crate) template: Option<u64>,
    pub(crate) pattern: Option<u64>,
    pub(crate) transform: &'a TransformState,
    pub(crate) show_outlines: bool,
}

pub(crate) fn fingerprint_snapshot(key: &SnapshotKey<'_>) -> SnapshotFingerprint {
    let mut h = StableHasher::new();
    write_asset(&mut h, key.template);
    write_asset(&mut h, key.pattern);
    write_transform(&mut h, key.transform);
    h.write_bool(key.show_outlines);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn finish(self) -> SnapshotFingerprint {
        let v = self.inner.digest128();
        SnapshotFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_asset(h: &mut StableHasher, generation: Option<u64>) {
    match generation {
        Some(g) => {
            h.write_u8(1);
            h.write_u64(g);
        }
        None => h.write_u8(0),
    }
}

fn write_transform(h: &mut StableHasher, t: &TransformState) {
    h.write_f64(t.scale());
    h.write_f64(t.offset_x());
    h.write_f64(t.offset_y());
    h.write_f64(t.rotation());
    h.write_f64(t.opacity());
    h.write_bool(t.flip_h());
    h.write_bool(t.flip_v());
    h.write_u8(t.repeat_mode().tag());
}

#[cfg(test)]
#[path = "../../tests/unit/session/fingerprint.rs"]
mod tests;
