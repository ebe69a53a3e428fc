/// The element hash that every composition rule in this crate is built from.
///
/// Unlike [`Hash`](std::hash::Hash), which feeds a [`Hasher`](std::hash::Hasher) chosen by the
/// caller, a hash code is a fixed `i32` for a given value. Sequence, set and map hash codes are
/// derived from their elements' hash codes with wrapping arithmetic, so two equal containers always
/// agree on their hash code, whichever implementation holds them.
///
/// The provided implementations follow the usual conventions: integers that fit in 32 bits hash to
/// themselves, wider integers fold their high half into their low half, strings use the polynomial
/// `31 * h + c` over their UTF-16 code units and [`None`] hashes to `0`.
pub trait HashCode {
    fn hash_code(&self) -> i32;
}

macro_rules! impl_narrow_hash_code {
    ($($ty:ty),*) => {
        $(
            impl HashCode for $ty {
                fn hash_code(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

impl_narrow_hash_code!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_wide_hash_code {
    ($($ty:ty),*) => {
        $(
            impl HashCode for $ty {
                fn hash_code(&self) -> i32 {
                    let bits = *self as u64;
                    (bits ^ (bits >> 32)) as i32
                }
            }
        )*
    };
}

impl_wide_hash_code!(i64, u64, isize, usize);

impl HashCode for i128 {
    fn hash_code(&self) -> i32 {
        let bits = *self as u128;
        ((bits as u64) ^ ((bits >> 64) as u64)).hash_code()
    }
}

impl HashCode for u128 {
    fn hash_code(&self) -> i32 {
        ((*self as u64) ^ ((*self >> 64) as u64)).hash_code()
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }
}

impl HashCode for char {
    fn hash_code(&self) -> i32 {
        // Characters outside the basic plane occupy two UTF-16 units, hash them as a string of two.
        let mut units = [0_u16; 2];
        match self.encode_utf16(&mut units) {
            [unit] => *unit as i32,
            [high, low] => (*high as i32).wrapping_mul(31).wrapping_add(*low as i32),
            _ => 0,
        }
    }
}

impl HashCode for f32 {
    fn hash_code(&self) -> i32 {
        // All NaNs share a single canonical bit pattern.
        let bits = if self.is_nan() { 0x7fc0_0000 } else { self.to_bits() };
        bits as i32
    }
}

impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        let bits = if self.is_nan() { 0x7ff8_0000_0000_0000 } else { self.to_bits() };
        bits.hash_code()
    }
}

impl HashCode for () {
    fn hash_code(&self) -> i32 {
        0
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16()
            .fold(0_i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for &mut T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode + ?Sized> HashCode for Box<T> {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        match self {
            Some(value) => value.hash_code(),
            None => 0,
        }
    }
}

/// Combines hash codes in order: `h = 31 * h + e` starting from `1`.
pub fn sequence_hash_code<'a, T, I>(items: I) -> i32
where
    T: HashCode + 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter()
        .fold(1_i32, |hash, item| hash.wrapping_mul(31).wrapping_add(item.hash_code()))
}

/// Combines hash codes without regard for order, by summing them.
pub fn set_hash_code<'a, T, I>(items: I) -> i32
where
    T: HashCode + 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter()
        .fold(0_i32, |hash, item| hash.wrapping_add(item.hash_code()))
}

/// Combines entry hash codes without regard for order. Each entry contributes
/// `hash(key) ^ hash(value)`.
pub fn map_hash_code<'a, K, V, I>(entries: I) -> i32
where
    K: HashCode + 'a + ?Sized,
    V: HashCode + 'a + ?Sized,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter()
        .fold(0_i32, |hash, (key, value)| {
            hash.wrapping_add(key.hash_code() ^ value.hash_code())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_code() {
        assert_eq!("".hash_code(), 0);
        assert_eq!("a".hash_code(), 97);
        assert_eq!(
            "paolo".hash_code(), 106_434_209,
            "Strings should use the polynomial hash over their UTF-16 units."
        );
        assert_eq!(String::from("paolo").hash_code(), "paolo".hash_code());
    }

    #[test]
    fn test_integer_hash_code() {
        assert_eq!(42_i32.hash_code(), 42);
        assert_eq!((-7_i32).hash_code(), -7);
        assert_eq!(5_i64.hash_code(), 5);
        assert_eq!(
            (1_i64 << 32).hash_code(), 1,
            "Wide integers should fold their high half into the low half."
        );
        assert_eq!((-1_i64).hash_code(), 0);
    }

    #[test]
    fn test_misc_hash_code() {
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!('a'.hash_code(), 97);
        assert_eq!(None::<i32>.hash_code(), 0, "None should hash like a null element.");
        assert_eq!(Some(3).hash_code(), 3);
        assert_eq!(1.0_f64.hash_code(), 1_072_693_248);
    }

    #[test]
    fn test_combinators() {
        assert_eq!(sequence_hash_code::<i32, _>([]), 1);
        assert_eq!(sequence_hash_code(&[1, 2]), (31 + 1) * 31 + 2);
        assert_ne!(
            sequence_hash_code(&[1, 2]), sequence_hash_code(&[2, 1]),
            "Sequence hashes should depend on order."
        );
        assert_eq!(set_hash_code(&[1, 2]), set_hash_code(&[2, 1]));
        assert_eq!(map_hash_code([(&1, &"a")]), 1 ^ 97);
    }
}
