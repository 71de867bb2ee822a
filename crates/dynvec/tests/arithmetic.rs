//! Element-wise arithmetic, degrade-to-empty diagnostics and equality.

use std::sync::Arc;

use dynvec::{
    DiagnosticSink, DynamicArray, ElementWiseOp, Error, LogSink, RecordingSink, Result,
    short_type_name,
};

fn ints(values: &[i32]) -> DynamicArray<i32> {
    DynamicArray::from(values.to_vec())
}

// ============================================================================
// Equal lengths
// ============================================================================

#[test]
fn test_add_and_multiply_scenario() {
    let a = ints(&[1, 2, 3, 4]);
    let b = ints(&[5, 6, 7, 8]);

    assert_eq!(a.add(&b), [6, 8, 10, 12]);
    assert_eq!(a.multiply(&b), [5, 12, 21, 32]);

    // operator sugar behaves the same
    assert_eq!(&a + &b, [6, 8, 10, 12]);
    assert_eq!(&a * &b, [5, 12, 21, 32]);
}

#[test]
fn test_elementwise_matches_per_index() -> Result<()> {
    let a = ints(&[-3, 0, 7, 100, 12]);
    let b = ints(&[4, 9, -7, 3, 0]);

    let sum = a.try_add(&b)?;
    let product = a.try_multiply(&b)?;
    assert_eq!(sum.len(), a.len());
    assert_eq!(product.len(), a.len());
    for i in 0..a.len() {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!(product[i], a[i] * b[i]);
    }
    Ok(())
}

#[test]
fn test_empty_operands() -> Result<()> {
    let a: DynamicArray<f32> = DynamicArray::new();
    let b: DynamicArray<f32> = DynamicArray::with_size(0);
    assert!(a.try_add(&b)?.is_empty());
    assert!(a.try_multiply(&b)?.is_empty());
    Ok(())
}

#[test]
fn test_result_capacity_follows_sized_constructor() {
    let a = ints(&[1, 2, 3]);
    let sum = a.add(&a);
    assert_eq!(sum.capacity(), 6);
}

#[test]
fn test_floats() {
    let a: DynamicArray<f64> = DynamicArray::from([1.5, 2.5]);
    let b: DynamicArray<f64> = DynamicArray::from([3.0, 4.0]);
    assert_eq!(a.add(&b), [4.5, 6.5]);
    assert_eq!(a.multiply(&b), [4.5, 10.0]);
    assert_eq!(a.add(&b).to_string(), "[4.5, 6.5]");
}

#[test]
fn test_integers_wrap() {
    let a: DynamicArray<u8> = DynamicArray::from([250, 16]);
    let b: DynamicArray<u8> = DynamicArray::from([10, 16]);
    assert_eq!(a.add(&b), [4, 32]);
    assert_eq!(a.multiply(&b), [196, 0]);

    let max: DynamicArray<i32> = DynamicArray::from([i32::MAX]);
    let one: DynamicArray<i32> = DynamicArray::from([1]);
    assert_eq!(max.add(&one), [i32::MIN]);
}

// ============================================================================
// Mixed element types
// ============================================================================

#[test]
fn test_widening_integers() {
    let narrow: DynamicArray<i32> = DynamicArray::from([1, -2]);
    let wide: DynamicArray<i64> = DynamicArray::from([i64::from(i32::MAX) + 1, 10]);

    let sum: DynamicArray<i64> = narrow.add(&wide);
    assert_eq!(sum, [2_147_483_649, 8]);

    let product: DynamicArray<i64> = wide.multiply(&narrow);
    assert_eq!(product, [2_147_483_648, -20]);
}

#[test]
fn test_widening_to_floats() {
    let ints: DynamicArray<i32> = DynamicArray::from([1, 2]);
    let doubles: DynamicArray<f64> = DynamicArray::from([0.5, 0.25]);
    let floats: DynamicArray<f32> = DynamicArray::from([1.5, 2.0]);

    let sum: DynamicArray<f64> = ints.add(&doubles);
    assert_eq!(sum, [1.5, 2.25]);

    let product: DynamicArray<f64> = doubles.multiply(&ints);
    assert_eq!(product, [0.5, 0.5]);

    let sum: DynamicArray<f32> = ints.add(&floats);
    assert_eq!(sum, [2.5, 4.0]);

    let sum: DynamicArray<f64> = floats.add(&doubles);
    assert_eq!(sum, [2.0, 2.25]);
}

#[test]
fn test_chars_combine_as_code_points() {
    let a: DynamicArray<char> = DynamicArray::from(['a', '0']);
    let b: DynamicArray<char> = DynamicArray::from(['\u{1}', '\u{2}']);

    let sum: DynamicArray<u32> = a.add(&b);
    assert_eq!(sum, [98, 50]);

    let product: DynamicArray<u32> = a.multiply(&b);
    assert_eq!(product, [97, 96]);
}

#[test]
fn test_strings_concatenate() {
    let a: DynamicArray<String> = DynamicArray::from(["Hello".to_string(), "foo".to_string()]);
    let b: DynamicArray<String> = DynamicArray::from([", World".to_string(), "bar".to_string()]);

    let sum = a.add(&b);
    assert_eq!(sum.to_string(), "[Hello, World, foobar]");
    assert_eq!(a.len(), 2);
    assert_eq!(a[0], "Hello");
}

// ============================================================================
// Length mismatch
// ============================================================================

#[test]
fn test_mismatch_degrades_to_empty() {
    let a = ints(&[1, 2, 3, 4]);
    let b = ints(&[1, 2, 3]);
    let sink = RecordingSink::new();

    let sum = a.add_with(&b, &sink);
    assert!(sum.is_empty());
    assert_eq!(sum.to_string(), "[]");

    let product = b.multiply_with(&a, &sink);
    assert!(product.is_empty());

    assert_eq!(
        sink.take(),
        vec![
            Error::LengthMismatch {
                op: ElementWiseOp::Add,
                left: 4,
                right: 3,
            },
            Error::LengthMismatch {
                op: ElementWiseOp::Multiply,
                left: 3,
                right: 4,
            },
        ]
    );
    assert!(sink.is_empty());

    // inputs untouched
    assert_eq!(a, [1, 2, 3, 4]);
    assert_eq!(b, [1, 2, 3]);
}

#[test]
fn test_mismatch_with_default_sink() {
    let a = ints(&[1, 2, 3, 4]);
    let b: DynamicArray<i32> = DynamicArray::with_size(3);

    assert!(a.add(&b).is_empty());
    assert!(a.multiply(&b).is_empty());
    assert!((&a + &b).is_empty());
    assert!((&a * &b).is_empty());
    assert_eq!(a, [1, 2, 3, 4]);
    assert_eq!(b, [0, 0, 0]);
}

#[test]
fn test_mismatch_with_empty_operand() {
    let a = ints(&[1]);
    let empty: DynamicArray<i32> = DynamicArray::new();
    let sink = RecordingSink::new();

    assert!(a.add_with(&empty, &sink).is_empty());
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_strict_variant_reports_error() {
    let a = ints(&[1, 2, 3, 4]);
    let b = ints(&[1, 2, 3]);

    let err = a.try_add(&b).unwrap_err();
    assert_eq!(
        err,
        Error::LengthMismatch {
            op: ElementWiseOp::Add,
            left: 4,
            right: 3,
        }
    );
    assert_eq!(
        err.to_string(),
        "Arrays must be the same length for addition: left: 4, right: 3"
    );

    let err = a.try_multiply(&b).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Arrays must be the same length for multiplication: left: 4, right: 3"
    );
}

#[test]
fn test_sink_as_trait_object() {
    let a = ints(&[1, 2]);
    let b = ints(&[1]);
    let recording = Arc::new(RecordingSink::new());
    let log: Arc<dyn DiagnosticSink> = Arc::new(LogSink);
    let record: Arc<dyn DiagnosticSink> = recording.clone();

    for sink in [log, record] {
        assert!(a.add_with(&b, &*sink).is_empty());
    }
    assert_eq!(recording.len(), 1);
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equality() {
    let a = ints(&[0, 10, 2, 3]);
    let b = a.clone();
    let mut c = a.clone();
    c.push_back(4);
    let mut d = a.clone();
    d[3] = 4;

    assert!(a.equals(&a));
    assert!(a.equals(&b) && b.equals(&a));
    assert!(!a.equals(&c) && !c.equals(&a));
    assert!(!a.equals(&d) && !d.equals(&a));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut small: DynamicArray<i32> = DynamicArray::with_options(1.into());
    small.push_back(1);
    let big = ints(&[1]);
    assert_ne!(small.capacity(), big.capacity());
    assert_eq!(small, big);
}

#[test]
fn test_empty_arrays_are_equal() {
    let a: DynamicArray<String> = DynamicArray::new();
    let b: DynamicArray<String> = DynamicArray::with_size(0);
    assert!(a.equals(&b));

    // with_size(1) holds one default element, so it is not empty
    let c: DynamicArray<String> = DynamicArray::with_size(1);
    assert!(!a.equals(&c));
}

#[test]
fn test_equality_across_element_types() {
    let owned: DynamicArray<String> = DynamicArray::from(["a".to_string(), "b".to_string()]);
    let borrowed: DynamicArray<&str> = DynamicArray::from(["a", "b"]);
    assert!(owned.equals(&borrowed));
    assert!(owned == borrowed);
}

#[test]
fn test_short_type_names() {
    assert_eq!(short_type_name::<i32>(), "i32");
    assert_eq!(short_type_name::<String>(), "String");
    assert_eq!(
        short_type_name::<DynamicArray<String>>(),
        "DynamicArray<String>"
    );
    // cached
    assert!(std::ptr::eq(
        short_type_name::<DynamicArray<String>>(),
        short_type_name::<DynamicArray<String>>()
    ));
}
