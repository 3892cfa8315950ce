use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// Sequence of length in `len` where each element is `sep` with probability
/// `sep_per_mille / 1000`, and uniform over `alphabet` otherwise.
///
/// An empty `len` gives an empty sequence, and an empty `alphabet` gives
/// separators only.
pub struct SepSeq<T> {
    pub alphabet: Range<T>,
    pub sep: T,
    pub len: Range<usize>,
    pub sep_per_mille: u32,
}

/// Like [`SepSeq`], choosing the non-separator characters from `chars`.
pub struct SepStr {
    pub chars: Vec<char>,
    pub sep: char,
    pub len: Range<usize>,
    pub sep_per_mille: u32,
}

macro_rules! impl_gen_range {
    ( $($ty:ty)* ) => { $(
        /// # Panics
        /// Panics if the range is empty.
        impl Gen for Range<$ty> {
            type Output = $ty;
            fn generate<R: Rng>(&self, rng: &mut R) -> $ty {
                Uniform::from(self.clone()).sample(rng)
            }
        }
    )* }
}

impl_gen_range! { u8 u32 usize i32 }

fn draw_len<R: Rng>(len: &Range<usize>, rng: &mut R) -> usize {
    if len.is_empty() { 0 } else { len.generate(rng) }
}

fn is_sep<R: Rng>(per_mille: u32, rng: &mut R) -> bool {
    (0..1000_u32).generate(rng) < per_mille
}

impl<T> Gen for SepSeq<T>
where
    T: Clone + PartialOrd,
    Range<T>: Gen<Output = T>,
{
    type Output = Vec<T>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Vec<T> {
        let Self { alphabet, sep, len, sep_per_mille } = self;
        let n = draw_len(len, rng);
        (0..n)
            .map(|_| {
                if alphabet.is_empty() || is_sep(*sep_per_mille, rng) {
                    sep.clone()
                } else {
                    alphabet.generate(rng)
                }
            })
            .collect()
    }
}

impl Gen for SepStr {
    type Output = String;
    fn generate<R: Rng>(&self, rng: &mut R) -> String {
        let Self { chars, sep, len, sep_per_mille } = self;
        let n = draw_len(len, rng);
        (0..n)
            .map(|_| {
                if chars.is_empty() || is_sep(*sep_per_mille, rng) {
                    *sep
                } else {
                    chars[(0..chars.len()).generate(rng)]
                }
            })
            .collect()
    }
}

#[test]
fn separator_ratio() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([0; 32]);
    let seq =
        SepSeq { alphabet: 1..5_u8, sep: 0, len: 100..101, sep_per_mille: 250 };

    let n = 10_usize.pow(4);
    let mut hist = [0_usize; 5];
    for _ in 0..n {
        let a = seq.generate(&mut rng);
        assert_eq!(a.len(), 100);
        for x in a {
            hist[x as usize] += 1;
        }
    }
    let seps = hist[0];
    let total = n * 100;
    assert!(seps >= total / 4 * 99 / 100);
    assert!(seps <= total / 4 * 101 / 100);
    for &v in &hist[1..] {
        let expected = (total - seps) / 4;
        assert!(v >= expected * 98 / 100);
        assert!(v <= expected * 102 / 100);
    }
}

#[test]
fn strings() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([7; 32]);
    let s = SepStr {
        chars: vec!['x', 'ÿ'],
        sep: '|',
        len: 0..16,
        sep_per_mille: 500,
    };
    for _ in 0..1000 {
        let t = s.generate(&mut rng);
        assert!(t.chars().count() < 16);
        assert!(t.chars().all(|c| matches!(c, 'x' | 'ÿ' | '|')));
    }

    let only_sep =
        SepStr { chars: vec![], sep: '|', len: 3..4, sep_per_mille: 0 };
    assert_eq!(only_sep.generate(&mut rng), "|||");
}

#[test]
fn empty_ranges() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_seed([3; 32]);
    let no_len =
        SepSeq { alphabet: 1..5_u8, sep: 0, len: 0..0, sep_per_mille: 500 };
    assert_eq!(no_len.generate(&mut rng), Vec::<u8>::new());

    let no_alphabet =
        SepSeq { alphabet: 5..5_u8, sep: 0, len: 4..5, sep_per_mille: 0 };
    assert_eq!(no_alphabet.generate(&mut rng), [0; 4]);

    let no_len_str =
        SepStr { chars: vec!['x'], sep: '|', len: 7..7, sep_per_mille: 500 };
    assert_eq!(no_len_str.generate(&mut rng), "");
}
