use crate::image_classifier::test::fixture::Fixture;
use crate::species::Species;

fn predict_reference(name: &str) -> Species {
    let f = Fixture::new();
    let image = image::open(Fixture::reference_image(name)).unwrap();

    let prediction = f.pet_classifier.predict(&image).unwrap();

    let sum: f32 = prediction.entries.iter().map(|e| e.probability).sum();
    assert_eq!(prediction.entries.len(), 7);
    assert!((sum - 1.0).abs() < 1e-5);

    prediction.top(1)[0].species
}

#[test]
#[ignore = "needs pet_classifier_v1.onnx, its labels file, and reference photos"]
fn test_cat() {
    assert_eq!(predict_reference("cat.jpg").display_label(), "貓 (Cat)");
}

#[test]
#[ignore = "needs pet_classifier_v1.onnx, its labels file, and reference photos"]
fn test_dog() {
    assert_eq!(predict_reference("dog.jpg").display_label(), "狗 (Dog)");
}
