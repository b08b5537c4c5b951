use super::{
    humidity::HumidityRule, irrigation::IrrigationRule, precipitation::PrecipitationRule,
    soil_moisture::SoilMoistureRule, soil_ph::SoilPhRule, temperature::TemperatureRule,
    wind::WindRule, AdvisoryContext, Rule,
};

/// Ordered rule set; output order follows rule order.
pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(TemperatureRule),
            Box::new(HumidityRule),
            Box::new(SoilMoistureRule),
            Box::new(SoilPhRule),
            Box::new(WindRule),
            Box::new(PrecipitationRule),
            Box::new(IrrigationRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &AdvisoryContext) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let advice = rule.evaluate(ctx)?;
                tracing::trace!(rule = rule.id(), "advisory rule fired");
                Some(advice)
            })
            .collect()
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
