/// Cosine similarity between two vectors of equal length.
///
/// Returns `dot(a, b) / (|a| * |b|)`, a value in `[-1.0, 1.0]` (`[0.0, 1.0]`
/// for count vectors).
///
/// If either vector is all zeros the norm product is zero and the result is
/// `NaN`. Callers that may see empty documents must check with
/// [`f64::is_nan`].
pub fn cosine_similarity<T>(a: &[T], b: &[T]) -> f64
where
    T: Copy + Into<f64>,
{
    debug_assert_eq!(a.len(), b.len(), "vector dimensions must match");

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let x: f64 = x.into();
        let y: f64 = y.into();
        dot = x.mul_add(y, dot);
        norm_a = x.mul_add(x, norm_a);
        norm_b = y.mul_add(y, norm_b);
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

pub fn is_zero_vector<T>(v: &[T]) -> bool
where
    T: Copy + Into<f64>,
{
    v.iter().all(|&x| Into::<f64>::into(x) == 0.0)
}
