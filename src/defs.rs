use crate::die::Die;

/// A fair two-faced coin, `'H'` and `'T'`.
#[must_use]
pub fn coin() -> Die<char> {
    Die::with_uniform_weights(vec!['H', 'T'])
}

#[must_use]
pub fn d4() -> Die<u32> {
    Die::numeric(4)
}

#[must_use]
pub fn d6() -> Die<u32> {
    Die::numeric(6)
}

#[must_use]
pub fn d8() -> Die<u32> {
    Die::numeric(8)
}

#[must_use]
pub fn d10() -> Die<u32> {
    Die::numeric(10)
}

#[must_use]
pub fn d12() -> Die<u32> {
    Die::numeric(12)
}

#[must_use]
pub fn d20() -> Die<u32> {
    Die::numeric(20)
}
