// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cross-product binding synthesis
//!
//! SWIG cannot wrap a C++ template until it is instantiated, so every model
//! combination the Python layer may ask for gets its own named template
//! instantiation in the main interface:
//!
//! - one neuron population adder per neuron model
//! - one synapse population adder per (postsynaptic, weight update) pair
//! - one current source adder per current source model
//! - one variable initialiser per snippet
//!
//! Every family list ends with `Custom`, so the runtime-defined models are
//! covered by the same products.

use serde::Serialize;
use tracing::debug;

use crate::family::{FamilyCatalog, FamilyKind, ModelFamily};

/// One named template instantiation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    /// Python-visible name, e.g. `addSynapsePopulation_StaticPulse_ExpCurr`
    pub name: String,
    /// Template being instantiated
    pub template: String,
}

impl Binding {
    fn new(name: String, template: String) -> Self {
        debug!(binding = %name, template = %template, "Synthesized binding");
        Self { name, template }
    }
}

fn single_model_bindings(family: &ModelFamily, prefix: &str, generic: &str) -> Vec<Binding> {
    let kind = family.kind();
    family
        .model_names()
        .map(|model| {
            Binding::new(
                format!("{}_{}", prefix, model),
                format!("{}<{}>", generic, kind.qualify(model)),
            )
        })
        .collect()
}

pub fn neuron_population_bindings(neurons: &ModelFamily) -> Vec<Binding> {
    single_model_bindings(neurons, "addNeuronPopulation", "NNmodel::addNeuronPopulation")
}

/// Postsynaptic models form the outer loop, weight update models the inner one
pub fn synapse_population_bindings(
    postsynaptic: &ModelFamily,
    weight_update: &ModelFamily,
) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for ps_model in postsynaptic.model_names() {
        for wu_model in weight_update.model_names() {
            bindings.push(Binding::new(
                format!("addSynapsePopulation_{}_{}", wu_model, ps_model),
                format!(
                    "NNmodel::addSynapsePopulation<{}, {}>",
                    FamilyKind::WeightUpdate.qualify(wu_model),
                    FamilyKind::Postsynaptic.qualify(ps_model)
                ),
            ));
        }
    }
    bindings
}

pub fn current_source_bindings(current_sources: &ModelFamily) -> Vec<Binding> {
    single_model_bindings(current_sources, "addCurrentSource", "NNmodel::addCurrentSource")
}

pub fn var_init_bindings(snippets: &ModelFamily) -> Vec<Binding> {
    single_model_bindings(snippets, "initVar", "initVar")
}

/// All bindings of the main interface, grouped in emission order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BindingSet {
    pub neuron_populations: Vec<Binding>,
    pub synapse_populations: Vec<Binding>,
    pub current_sources: Vec<Binding>,
    pub var_initialisers: Vec<Binding>,
}

impl BindingSet {
    pub fn from_catalog(catalog: &FamilyCatalog) -> Self {
        Self {
            neuron_populations: neuron_population_bindings(&catalog.neuron),
            synapse_populations: synapse_population_bindings(
                &catalog.postsynaptic,
                &catalog.weight_update,
            ),
            current_sources: current_source_bindings(&catalog.current_source),
            var_initialisers: var_init_bindings(&catalog.init_var_snippet),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.neuron_populations
            .iter()
            .chain(&self.synapse_populations)
            .chain(&self.current_sources)
            .chain(&self.var_initialisers)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::ModelDeclaration;
    use std::collections::HashSet;

    fn family(kind: FamilyKind, names: &[&str]) -> ModelFamily {
        let declared = names
            .iter()
            .map(|name| ModelDeclaration::new(*name, 1, kind.has_variables().then_some(1)))
            .collect();
        ModelFamily::new(kind, kind.header_file(), declared)
    }

    #[test]
    fn test_synapse_cross_product_is_complete_and_unique() {
        let ps = family(FamilyKind::Postsynaptic, &["A", "B"]);
        let wu = family(FamilyKind::WeightUpdate, &["X", "Y"]);
        let bindings = synapse_population_bindings(&ps, &wu);

        assert_eq!(bindings.len(), 9);
        let names: HashSet<_> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names.len(), 9);
        for wu_model in ["X", "Y", "Custom"] {
            for ps_model in ["A", "B", "Custom"] {
                assert!(names.contains(format!("addSynapsePopulation_{}_{}", wu_model, ps_model).as_str()));
            }
        }
    }

    #[test]
    fn test_synapse_order_and_template_text() {
        let ps = family(FamilyKind::Postsynaptic, &["ExpCurr"]);
        let wu = family(FamilyKind::WeightUpdate, &["StaticPulse"]);
        let bindings = synapse_population_bindings(&ps, &wu);
        let names: Vec<_> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "addSynapsePopulation_StaticPulse_ExpCurr",
                "addSynapsePopulation_Custom_ExpCurr",
                "addSynapsePopulation_StaticPulse_Custom",
                "addSynapsePopulation_Custom_Custom",
            ]
        );
        assert_eq!(
            bindings[0].template,
            "NNmodel::addSynapsePopulation<WeightUpdateModels::StaticPulse, PostsynapticModels::ExpCurr>"
        );
    }

    #[test]
    fn test_single_family_bindings() {
        let neurons = neuron_population_bindings(&family(FamilyKind::Neuron, &["Izhikevich"]));
        assert_eq!(
            neurons[0],
            Binding {
                name: "addNeuronPopulation_Izhikevich".to_string(),
                template: "NNmodel::addNeuronPopulation<NeuronModels::Izhikevich>".to_string(),
            }
        );
        assert_eq!(neurons[1].name, "addNeuronPopulation_Custom");

        let sources = current_source_bindings(&family(FamilyKind::CurrentSource, &[]));
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].template, "NNmodel::addCurrentSource<CurrentSourceModels::Custom>");

        let inits = var_init_bindings(&family(FamilyKind::InitVarSnippet, &["Uniform"]));
        assert_eq!(inits[0].name, "initVar_Uniform");
        assert_eq!(inits[0].template, "initVar<InitVarSnippet::Uniform>");
    }

    #[test]
    fn test_binding_set_emission_order() {
        let catalog = FamilyCatalog {
            neuron: family(FamilyKind::Neuron, &["LIF"]),
            postsynaptic: family(FamilyKind::Postsynaptic, &[]),
            weight_update: family(FamilyKind::WeightUpdate, &[]),
            current_source: family(FamilyKind::CurrentSource, &["DC"]),
            init_var_snippet: family(FamilyKind::InitVarSnippet, &[]),
        };
        let set = BindingSet::from_catalog(&catalog);
        let names: Vec<_> = set.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "addNeuronPopulation_LIF",
                "addNeuronPopulation_Custom",
                "addSynapsePopulation_Custom_Custom",
                "addCurrentSource_DC",
                "addCurrentSource_Custom",
                "initVar_Custom",
            ]
        );
        assert_eq!(set.len(), 6);
        assert!(!set.is_empty());
    }
}
