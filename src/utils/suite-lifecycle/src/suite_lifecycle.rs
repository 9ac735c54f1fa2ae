// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::{HashMap, HashSet};

use dill::{Builder, BuilderExt, Catalog, TypecastBuilder};
use petgraph::algo::toposort;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type HookName = &'static str;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A callback fired once per suite run, before the first test case executes
#[async_trait::async_trait]
pub trait SuiteStartHook: Send + Sync {
    async fn on_suite_start(&self) -> Result<(), BoxedError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct SuiteStartHookMeta {
    pub hook_name: HookName,
    pub depends_on: &'static [HookName],
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SuiteStartError {
    #[error(transparent)]
    HookNameNonUnique(HookNameNonUniqueError),

    #[error(transparent)]
    DependsOnUnresolved(DependsOnUnresolvedError),

    #[error(transparent)]
    DependsOnLoop(DependsOnLoopError),

    #[error(transparent)]
    HookFailed(HookFailedError),
}

#[derive(Error, Debug)]
#[error("Suite-start hook name '{hook_name}' is not unique")]
pub struct HookNameNonUniqueError {
    pub hook_name: HookName,
}

#[derive(Error, Debug)]
#[error("Suite-start hook '{hook_name}' depends on unresolved hook '{unresolved_depends_on}'")]
pub struct DependsOnUnresolvedError {
    pub hook_name: HookName,
    pub unresolved_depends_on: HookName,
}

#[derive(Error, Debug)]
#[error("Suite-start hook '{hook_name}' is part of a dependency loop")]
pub struct DependsOnLoopError {
    pub hook_name: HookName,
}

#[derive(Error, Debug)]
#[error("Suite-start hook '{hook_name}' failed")]
pub struct HookFailedError {
    pub hook_name: HookName,
    #[source]
    pub source: BoxedError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(bon::Builder, Default)]
pub struct RunSuiteStartOptions {
    pub hook_selector: Option<HookSelector>,
}

#[derive(Debug)]
pub enum HookSelector {
    AllOf(HashSet<HookName>),
    NoneOf(HashSet<HookName>),
}

impl HookSelector {
    pub fn matches(&self, hook_name: HookName) -> bool {
        match self {
            Self::AllOf(selected) => selected.contains(hook_name),
            Self::NoneOf(excluded) => !excluded.contains(hook_name),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tracing::instrument(level = "debug", skip_all)]
pub async fn run_suite_start_hooks(catalog: &Catalog) -> Result<(), SuiteStartError> {
    run_suite_start_hooks_ex(catalog, RunSuiteStartOptions::default()).await
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn run_suite_start_hooks_ex(
    catalog: &Catalog,
    options: RunSuiteStartOptions,
) -> Result<(), SuiteStartError> {
    let hook_builders_by_name = {
        let mut hook_builders_by_name = HashMap::new();

        for hook_builder in catalog.builders_for::<dyn SuiteStartHook>() {
            let metadata = suite_start_hook_metadata(&hook_builder);
            let hook_name = metadata.hook_name;

            if hook_builders_by_name
                .insert(hook_name, (hook_builder, metadata))
                .is_some()
            {
                return Err(SuiteStartError::HookNameNonUnique(HookNameNonUniqueError {
                    hook_name,
                }));
            }
        }

        hook_builders_by_name
    };
    tracing::debug!("Registered {} suite-start hooks", hook_builders_by_name.len());

    check_hook_dependencies(&hook_builders_by_name)?;

    let run_order = hooks_topological_order(&build_hook_graph(&hook_builders_by_name))?;
    tracing::debug!("Suite-start hook order: {run_order:?}");

    for hook_name in run_order {
        if let Some(hook_selector) = &options.hook_selector {
            if !hook_selector.matches(hook_name) {
                tracing::debug!(hook_name, "Skipping suite-start hook");
                continue;
            }
        }

        let (hook_builder, _) = hook_builders_by_name
            .get(hook_name)
            .expect("Hook builder must be present");

        tracing::info!(hook_name, "Running suite-start hook");
        let hook = hook_builder.get(catalog).unwrap();
        hook.on_suite_start()
            .await
            .map_err(|source| SuiteStartError::HookFailed(HookFailedError { hook_name, source }))?;
    }

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn suite_start_hook_metadata<'a>(
    hook_builder: &TypecastBuilder<'a, dyn SuiteStartHook + 'static>,
) -> SuiteStartHookMeta {
    let all_metadata: Vec<&SuiteStartHookMeta> = hook_builder.metadata_get_all();
    assert!(
        all_metadata.len() == 1,
        "Must define exactly one `SuiteStartHookMeta` record for a suite-start hook {}",
        hook_builder.instance_type_name()
    );
    (*all_metadata.first().unwrap()).clone()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn check_hook_dependencies(
    hook_builders_by_name: &HashMap<
        &'static str,
        (
            TypecastBuilder<'_, dyn SuiteStartHook + 'static>,
            SuiteStartHookMeta,
        ),
    >,
) -> Result<(), SuiteStartError> {
    for (_, hook_metadata) in hook_builders_by_name.values() {
        for depends_on in hook_metadata.depends_on {
            if !hook_builders_by_name.contains_key(depends_on) {
                return Err(SuiteStartError::DependsOnUnresolved(
                    DependsOnUnresolvedError {
                        hook_name: hook_metadata.hook_name,
                        unresolved_depends_on: depends_on,
                    },
                ));
            }
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn build_hook_graph(
    hook_builders_by_name: &HashMap<
        &'static str,
        (
            TypecastBuilder<'_, dyn SuiteStartHook + 'static>,
            SuiteStartHookMeta,
        ),
    >,
) -> StableDiGraph<&'static str, ()> {
    let mut hook_graph: StableDiGraph<&'static str, ()> = StableDiGraph::new();
    let mut hook_node_indices: HashMap<&'static str, NodeIndex> = HashMap::new();

    for (_, hook_metadata) in hook_builders_by_name.values() {
        let node_index = hook_graph.add_node(hook_metadata.hook_name);
        hook_node_indices.insert(hook_metadata.hook_name, node_index);
    }

    for (_, hook_metadata) in hook_builders_by_name.values() {
        let node_index = hook_node_indices
            .get(hook_metadata.hook_name)
            .expect("Node must be indexed");

        for depends_on in hook_metadata.depends_on {
            let dependency_index = hook_node_indices
                .get(depends_on)
                .expect("Node must be indexed");

            hook_graph.add_edge(*dependency_index, *node_index, ());
        }
    }

    hook_graph
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn hooks_topological_order(
    hook_graph: &StableDiGraph<&'static str, ()>,
) -> Result<Vec<&'static str>, SuiteStartError> {
    let sort_result = toposort(hook_graph, None);
    let run_order: Vec<_> = match sort_result {
        Ok(nodes_order) => nodes_order
            .iter()
            .map(|node_index| {
                *(hook_graph
                    .node_weight(*node_index)
                    .expect("Node must be present"))
            })
            .collect(),
        Err(cycle) => {
            let looped_hook_name = *(hook_graph
                .node_weight(cycle.node_id())
                .expect("Node must be present"));
            return Err(SuiteStartError::DependsOnLoop(DependsOnLoopError {
                hook_name: looped_hook_name,
            }));
        }
    };
    Ok(run_order)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
