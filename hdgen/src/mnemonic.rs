//! BIP-39 mnemonic generation, validation and seed derivation.
//!
//! # Prefix Expansion
//!
//! Every word in the English wordlist is uniquely identified by its first
//! four characters, so [`expand`] accepts abbreviated phrases and rewrites
//! them to full words before parsing.
//!
//! ```
//! use hdgen::mnemonic;
//!
//! let phrase = "aban aban aban aban aban aban aban aban aban aban aban abou";
//! let expanded = mnemonic::expand(phrase).unwrap();
//! assert!(mnemonic::validate(expanded.split_whitespace()));
//! ```

use core::fmt;

use bip39::Language;
use rand_core::{OsRng, RngCore};
use zeroize::Zeroizing;

use crate::{Error, Result};

/// Entropy sizes accepted by [`Mnemonic::generate`], in bits.
pub const ENTROPY_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Minimum prefix length required for unambiguous word expansion.
const MIN_PREFIX_LEN: usize = 4;

const LANGUAGE: Language = Language::English;

/// Map a mnemonic word count to the entropy size it encodes.
pub fn entropy_bits_for_words(word_count: usize) -> Result<usize> {
    match word_count {
        12 | 15 | 18 | 21 | 24 => Ok(word_count / 3 * 32),
        _ => Err(Error::InvalidWordCount(word_count)),
    }
}

/// 64-byte BIP-39 seed, the root of every derived key (zeroized on drop).
#[derive(Clone)]
pub struct Seed(Zeroizing<[u8; 64]>);

impl Seed {
    /// Get the seed bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0[..] == other.0[..]
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

/// A checksummed BIP-39 mnemonic phrase (English wordlist).
#[derive(Clone)]
pub struct Mnemonic {
    inner: bip39::Mnemonic,
}

impl Mnemonic {
    /// Generate a new mnemonic from `entropy_bits` of OS randomness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropyBits`] for sizes outside
    /// [`ENTROPY_BITS`] and [`Error::EntropySourceFailure`] if the OS RNG
    /// fails.
    pub fn generate(entropy_bits: usize) -> Result<Self> {
        if !ENTROPY_BITS.contains(&entropy_bits) {
            return Err(Error::InvalidEntropyBits(entropy_bits));
        }

        let mut entropy = Zeroizing::new(vec![0u8; entropy_bits / 8]);
        OsRng
            .try_fill_bytes(&mut entropy)
            .map_err(|_| Error::EntropySourceFailure)?;

        Self::from_entropy(&entropy)
    }

    /// Generate a new mnemonic with the given number of words.
    pub fn generate_words(word_count: usize) -> Result<Self> {
        Self::generate(entropy_bits_for_words(word_count)?)
    }

    /// Create a mnemonic from raw entropy bytes (16, 20, 24, 28 or 32 bytes).
    pub fn from_entropy(entropy: &[u8]) -> Result<Self> {
        let inner = bip39::Mnemonic::from_entropy_in(LANGUAGE, entropy)?;
        Ok(Self { inner })
    }

    /// Parse and validate a space-separated phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] on an unknown word, a bad word
    /// count or a checksum mismatch.
    pub fn parse(phrase: &str) -> Result<Self> {
        let inner = bip39::Mnemonic::parse_in_normalized(LANGUAGE, phrase)?;
        Ok(Self { inner })
    }

    /// Get the phrase (zeroized on drop).
    ///
    /// **Security Warning**: the phrase reconstructs every derived key.
    #[must_use]
    pub fn phrase(&self) -> Zeroizing<String> {
        Zeroizing::new(self.inner.to_string())
    }

    /// Iterate over the words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.words()
    }

    /// Get the word count of the mnemonic.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }

    /// Number of entropy bits encoded by this mnemonic.
    #[must_use]
    pub fn entropy_bits(&self) -> usize {
        self.word_count() / 3 * 32
    }

    /// Stretch the mnemonic and passphrase into a 64-byte seed.
    ///
    /// PBKDF2-HMAC-SHA512, 2048 rounds, salt `"mnemonic" + passphrase`, over
    /// NFKD-normalized input. The same inputs always yield the same seed.
    #[must_use]
    pub fn to_seed(&self, passphrase: &str) -> Seed {
        Seed(Zeroizing::new(self.inner.to_seed(passphrase)))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl core::str::FromStr for Mnemonic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Check whether a word sequence is a valid mnemonic.
///
/// Returns `false` on an unknown word, an empty or multi-word item, an
/// unsupported word count or a checksum mismatch. Never fails.
pub fn validate<I, S>(words: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut phrase = Zeroizing::new(String::new());
    for (i, word) in words.into_iter().enumerate() {
        let word = word.as_ref();
        if word.is_empty() || word.contains(char::is_whitespace) {
            return false;
        }
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(word);
    }
    bip39::Mnemonic::parse_in_normalized(LANGUAGE, &phrase).is_ok()
}

/// Expand abbreviated words in a mnemonic phrase to their full BIP-39 form.
///
/// Each whitespace-separated token is matched against the wordlist:
/// - If the token is an exact match, it is kept as-is.
/// - If the token is a prefix (>= 4 characters) that uniquely identifies
///   a single word, it is expanded to that word.
/// - Otherwise, an error is returned.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand(phrase: &str) -> Result<Zeroizing<String>> {
    let word_list = LANGUAGE.word_list();

    let mut result = Zeroizing::new(String::new());
    for (i, token) in phrase.split_whitespace().enumerate() {
        let word = resolve_token(word_list, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token to a full word (exact match or unique prefix).
fn resolve_token(word_list: &'static [&'static str; 2048], token: &str) -> Result<&'static str> {
    // Wordlist is sorted.
    if let Ok(pos) = word_list.binary_search_by(|word| (*word).cmp(token)) {
        return Ok(word_list[pos]);
    }

    if token.len() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: String::from(token),
            min_len: MIN_PREFIX_LEN,
        });
    }

    // English words are unique in their first four letters.
    word_list
        .iter()
        .copied()
        .find(|word| word.starts_with(token))
        .ok_or_else(|| Error::UnknownPrefix(String::from(token)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const TEST_MNEMONIC: &str = concat!(
        "abandon abandon abandon abandon abandon abandon ",
        "abandon abandon abandon abandon abandon about"
    );

    #[test]
    fn test_generate_all_sizes() {
        for (bits, words) in [(128, 12), (160, 15), (192, 18), (224, 21), (256, 24)] {
            let mnemonic = Mnemonic::generate(bits).unwrap();
            assert_eq!(mnemonic.word_count(), words);
            assert_eq!(mnemonic.entropy_bits(), bits);
            assert!(validate(mnemonic.words()));
            assert!(validate(mnemonic.phrase().split_whitespace()));
        }
    }

    #[test]
    fn test_generate_invalid_size() {
        assert!(matches!(Mnemonic::generate(100), Err(Error::InvalidEntropyBits(100))));
        assert!(matches!(
            Mnemonic::generate_words(13),
            Err(Error::InvalidWordCount(13))
        ));
    }

    #[test]
    fn test_generate_is_random() {
        let a = Mnemonic::generate(128).unwrap();
        let b = Mnemonic::generate(128).unwrap();
        assert_ne!(*a.phrase(), *b.phrase());
    }

    #[test]
    fn test_from_entropy() {
        let mnemonic = Mnemonic::from_entropy(&[0u8; 16]).unwrap();
        assert_eq!(mnemonic.phrase().as_str(), TEST_MNEMONIC);
        assert!(Mnemonic::from_entropy(&[0u8; 15]).is_err());
    }

    #[test]
    fn test_seed_vector_empty_passphrase() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        let seed = mnemonic.to_seed("");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_vector_trezor_passphrase() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        let seed = mnemonic.to_seed("TREZOR");
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_deterministic_seed() {
        let a = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("test");
        let b = Mnemonic::parse(TEST_MNEMONIC).unwrap().to_seed("test");
        assert_eq!(a, b);
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        assert_ne!(mnemonic.to_seed(""), mnemonic.to_seed("SEcRET"));
    }

    #[test]
    fn test_validate_rejects_unknown_word() {
        let mut words: Vec<&str> = TEST_MNEMONIC.split_whitespace().collect();
        assert!(validate(&words));
        words[5] = "notaword";
        assert!(!validate(&words));
    }

    #[test]
    fn test_validate_checks_each_word() {
        assert!(!validate([TEST_MNEMONIC]));

        let mut words: Vec<&str> = TEST_MNEMONIC.split_whitespace().collect();
        words.insert(3, "");
        assert!(!validate(&words));

        // Joined back together these items still spell the valid phrase.
        words.remove(3);
        words[0] = "abandon abandon";
        words.remove(1);
        assert_eq!(words.len(), 11);
        assert!(!validate(&words));
    }

    #[test]
    fn test_validate_rejects_flipped_checksum_bit() {
        let word_list = LANGUAGE.word_list();
        for bits in [128, 256] {
            let mnemonic = Mnemonic::generate(bits).unwrap();
            let mut words: Vec<&str> = mnemonic.words().collect();
            let last = words.len() - 1;
            // The lowest bit of the last word always belongs to the checksum.
            let index = LANGUAGE.find_word(words[last]).unwrap() as usize;
            words[last] = word_list[index ^ 1];
            assert!(!validate(&words));
        }
    }

    #[test]
    fn test_validate_rejects_bad_word_count() {
        assert!(!validate(["abandon", "abandon", "about"]));
        assert!(!validate(Vec::<&str>::new()));
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let mnemonic = Mnemonic::parse(TEST_MNEMONIC).unwrap();
        let debug = format!("{mnemonic:?}");
        assert!(!debug.contains("abandon"));
        assert!(format!("{:?}", mnemonic.to_seed("")).contains("REDACTED"));
    }

    #[test]
    fn four_letter_prefix_expansion() {
        let abbreviated = "aban aban aban aban aban aban aban aban aban aban aban abou";
        assert_eq!(expand(abbreviated).unwrap().as_str(), TEST_MNEMONIC);
    }

    #[test]
    fn mixed_full_and_abbreviated() {
        let input =
            "abandon aban abandon aban abandon aban abandon aban abandon aban abandon about";
        assert_eq!(expand(input).unwrap().as_str(), TEST_MNEMONIC);
    }

    #[test]
    fn exact_short_words_accepted() {
        assert_eq!(expand("zoo art ice").unwrap().as_str(), "zoo art ice");
    }

    #[test]
    fn prefix_too_short_rejected() {
        assert!(matches!(
            expand("aba aba aba"),
            Err(Error::PrefixTooShort { min_len: 4, .. })
        ));
    }

    #[test]
    fn four_letter_prefixes_are_unique() {
        let word_list = LANGUAGE.word_list();
        let prefixes: HashSet<&str> = word_list.iter().map(|w| &w[..w.len().min(4)]).collect();
        assert_eq!(prefixes.len(), word_list.len());
    }

    #[test]
    fn bip39_words_are_wiped() {
        fn assert_zeroize<T: zeroize::Zeroize>() {}
        assert_zeroize::<bip39::Mnemonic>();
    }

    #[test]
    fn unknown_prefix_rejected() {
        assert!(matches!(
            expand("aban zzzz"),
            Err(Error::UnknownPrefix(prefix)) if prefix == "zzzz"
        ));
    }
}
