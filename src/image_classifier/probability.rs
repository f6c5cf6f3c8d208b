use crate::image_classifier::models::model_config::OutputKind;

/// Turns one output row into per-class probabilities.
pub fn to_probabilities(scores: Vec<f32>, output: OutputKind) -> Vec<f32> {
    match output {
        OutputKind::Logits => softmax(&scores),
        OutputKind::Probabilities => scores,
    }
}

pub fn softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&s| (s - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the highest score. Ties resolve to the earliest index.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, &score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((i, score)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0, -4.0, 0.5, 0.0, 10.0]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs.iter().all(|p| (0.0..=1.0).contains(p)));
        assert_eq!(argmax(&probs), Some(6));
    }

    #[test]
    fn test_softmax_is_stable_for_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]);
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_to_probabilities_by_output_kind() {
        let logits = vec![2.0, 0.0, 0.0];
        let probs = to_probabilities(logits.clone(), OutputKind::Logits);
        assert_eq!(probs, softmax(&logits));

        let already = vec![0.7, 0.2, 0.1];
        assert_eq!(
            to_probabilities(already.clone(), OutputKind::Probabilities),
            already
        );
    }

    #[test]
    fn test_argmax() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[0.5, 0.5]), Some(0));
    }
}
