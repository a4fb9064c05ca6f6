use silhouette_macro_tools::Fields;

use crate::math::FloatNum;

#[derive(Debug, Clone, PartialEq, Fields)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[r]
/// tolerances used by the kernel, passed explicitly to the `*_with_context` entry points
pub struct Context {
    // line or ray counts as perpendicular to an axis when |tangent · axis| is below this
    #[w(set)]
    parallel_tolerance: FloatNum,
    // circle centers closer than this are coincident
    #[w(set)]
    coincident_tolerance: FloatNum,
    // shorter polygon edges contribute no sat normal
    #[w(set)]
    min_edge_length: FloatNum,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            parallel_tolerance: 1e-6,
            coincident_tolerance: 1e-12,
            min_edge_length: 1e-12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_setter_chain() {
        let mut context = Context::default();
        context
            .set_parallel_tolerance(1e-3)
            .set_min_edge_length(1e-9);

        assert_eq!(context.parallel_tolerance(), 1e-3);
        assert_eq!(context.min_edge_length(), 1e-9);
        assert_eq!(context.coincident_tolerance(), 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_context_partial_json() {
        let context: Context = serde_json::from_str(r#"{ "parallel_tolerance": 0.5 }"#).unwrap();

        assert_eq!(context.parallel_tolerance(), 0.5);
        assert_eq!(context.min_edge_length(), Context::default().min_edge_length());
    }
}
