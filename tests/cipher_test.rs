use ocr_cipher::charset::{PositionalCharacter, PositionalCharacterSet};
use ocr_cipher::cipher::{CaesarCipher, Encipherer, IdentityCipher};
use ocr_cipher::geometry::BoundingRegion;

fn any_region() -> BoundingRegion {
    BoundingRegion::from_lbrt(0, 0, 10, 10, 100, 100).expect("should build region")
}

fn charset_from(chars: &[&str]) -> PositionalCharacterSet {
    chars
        .iter()
        .map(|c| PositionalCharacter::from_text(c, any_region()).expect("valid character"))
        .collect()
}

fn chars_of(set: &PositionalCharacterSet) -> Vec<String> {
    set.iter()
        .map(|pc| pc.character().as_str().to_string())
        .collect()
}

// ============================================================
// 1. Caesar cipher, single characters
// ============================================================

#[test]
fn test_caesar_enciphers_single_characters_correctly() {
    let cases = [("a", "b", 1), ("b", "a", -1), ("f", "k", 5)];

    for (input, expected, shift) in cases {
        let cipher = CaesarCipher::new(shift);
        let output = cipher
            .encipher(&charset_from(&[input]))
            .expect("cipher should succeed");
        assert_eq!(
            chars_of(&output),
            vec![expected.to_string()],
            "shift {shift} on {input:?}"
        );
    }
}

#[test]
fn test_caesar_wraps_around_the_alphabet() {
    let cipher = CaesarCipher::new(1);
    let output = cipher
        .encipher(&charset_from(&["z"]))
        .expect("cipher should succeed");
    assert_eq!(chars_of(&output), vec!["a".to_string()]);
}

#[test]
fn test_caesar_preserves_case() {
    let cipher = CaesarCipher::new(2);
    let output = cipher
        .encipher(&charset_from(&["Y"]))
        .expect("cipher should succeed");
    assert_eq!(chars_of(&output), vec!["A".to_string()]);
}

#[test]
fn test_caesar_passes_non_letters_through() {
    let cipher = CaesarCipher::new(7);
    let output = cipher
        .encipher(&charset_from(&["3", ".", " "]))
        .expect("cipher should succeed");
    assert_eq!(
        chars_of(&output),
        vec!["3".to_string(), ".".to_string(), " ".to_string()]
    );
}

// ============================================================
// 2. Caesar cipher, multiple characters
// ============================================================

#[test]
fn test_caesar_enciphers_multiple_characters_correctly() {
    let cases: [(&[&str], &[&str], i32); 3] = [
        (&["a", "b"], &["b", "c"], 1),
        (&["b", "a"], &["a", "z"], -1),
        (&["f", "a"], &["k", "f"], 5),
    ];

    for (inputs, expected, shift) in cases {
        let cipher = CaesarCipher::new(shift);
        let output = cipher
            .encipher(&charset_from(inputs))
            .expect("cipher should succeed");
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        assert_eq!(chars_of(&output), expected, "shift {shift} on {inputs:?}");
    }
}

#[test]
fn test_caesar_preserves_bounding_regions_and_order() {
    let region_a = BoundingRegion::from_lbrt(0, 0, 10, 10, 100, 100).expect("region");
    let region_b = BoundingRegion::from_lbrt(20, 0, 30, 10, 100, 100).expect("region");
    let input = vec![
        PositionalCharacter::from_text("a", region_a).expect("valid"),
        PositionalCharacter::from_text("b", region_b).expect("valid"),
    ];

    let output = CaesarCipher::new(3).encipher(&input).expect("cipher should succeed");

    assert_eq!(output.len(), 2);
    assert_eq!(output[0].region(), &region_a);
    assert_eq!(output[1].region(), &region_b);
    assert_eq!(chars_of(&output), vec!["d".to_string(), "e".to_string()]);
}

// ============================================================
// 3. Identity cipher
// ============================================================

#[test]
fn test_identity_returns_input_unchanged() {
    let input = charset_from(&["a", "Z", "9"]);
    let output = IdentityCipher.encipher(&input).expect("cipher should succeed");
    assert_eq!(output, input);
}
