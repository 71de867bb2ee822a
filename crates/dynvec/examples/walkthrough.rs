use dynvec::DynamicArray;

fn main() {
    env_logger::init();

    println!("Testing with i32:");
    let mut v1: DynamicArray<i32> = DynamicArray::new();
    println!("Empty array: {v1}");

    let v2: DynamicArray<i32> = DynamicArray::with_size(3);
    println!("Array of size 3: {v2}");

    v1.push_back(1);
    v1.push_back(2);
    v1.push_back(3);
    println!("v1 after push_back: {v1}");

    v1.push_front(0);
    println!("v1 after push_front: {v1}");

    v1.insert(2, 10);
    println!("v1 after insert at 2: {v1}");

    v1.erase(1);
    println!("v1 after erase at 1: {v1}");

    let mut v3 = v1.clone();
    println!("v3 (copy of v1): {v3}");
    println!("v1 == v3: {}", v1 == v3);

    v3.push_back(4);
    println!("v1 == v3 after change: {}", v1 == v3);

    let v4: DynamicArray<i32> = DynamicArray::from([1, 2, 3, 4]);
    let v5: DynamicArray<i32> = DynamicArray::from([5, 6, 7, 8]);
    println!("v4 + v5: {}", &v4 + &v5);
    println!("v4 * v5: {}", &v4 * &v5);

    let v6: DynamicArray<i32> = DynamicArray::with_size(3);
    println!("Invalid sum (different sizes): {}", &v4 + &v6);

    println!("\nTesting with f64:");
    let mut dv1: DynamicArray<f64> = DynamicArray::from([1.5, 2.5]);
    let dv2: DynamicArray<f64> = DynamicArray::from([3.0, 4.0]);
    println!("dv1: {dv1}");
    println!("dv2: {dv2}");
    println!("dv1 + dv2: {}", &dv1 + &dv2);
    println!("dv1 * dv2: {}", &dv1 * &dv2);
    dv1.push_back(5.5);
    println!("dv1 after push_back: {dv1}");

    println!("\nMixed i32 and f64:");
    let ints: DynamicArray<i32> = DynamicArray::from([1, 2]);
    println!("[1, 2] + dv2: {}", ints.add(&dv2));

    println!("\nTesting with String:");
    let mut sv1: DynamicArray<String> = DynamicArray::new();
    sv1.push_back("Hello".to_string());
    sv1.push_back(" ".to_string());
    sv1.push_back("World".to_string());
    println!("sv1: {sv1}");

    let mut sv2 = sv1.clone();
    sv2.insert(3, "!".to_string());
    println!("sv2 after insert: {sv2}");
    println!("sv1 == sv2: {}", sv1 == sv2);
}
