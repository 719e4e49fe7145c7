// Parallel asset preloading. The core never performs I/O itself; the host
// supplies a future-returning load function and all vehicles are fetched as
// a fan-out/join with fail-fast semantics: the first failure surfaces and
// the remaining in-flight loads are dropped, not awaited.

use std::collections::HashMap;
use std::future::Future;

use tokio::task::JoinSet;

use crate::error::LoadError;
use crate::scene::Scene;

/// One catalog entry: stable vehicle id plus the asset path handed to the
/// loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleEntry {
    pub id: String,
    pub path: String,
}

impl VehicleEntry {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
        }
    }
}

/// Load every catalog entry concurrently and join the results.
///
/// Returns the id-to-scene map once all loads succeed. On the first failed
/// load the error is returned immediately; dropping the join set aborts the
/// still-running siblings.
pub async fn preload_all<L, Fut>(
    catalog: &[VehicleEntry],
    load: L,
) -> Result<HashMap<String, Scene>, LoadError>
where
    L: Fn(String) -> Fut,
    Fut: Future<Output = Result<Scene, LoadError>> + Send + 'static,
{
    let total = catalog.len();
    log::info!("preloading {total} vehicle models");

    let mut tasks = JoinSet::new();
    for entry in catalog {
        let id = entry.id.clone();
        let fut = load(entry.path.clone());
        tasks.spawn(async move { (id, fut.await) });
    }

    let mut scenes = HashMap::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        let (id, result) = joined.map_err(|e| LoadError::Join(e.to_string()))?;
        match result {
            Ok(scene) => {
                log::info!("preloaded {id} ({}/{total})", scenes.len() + 1);
                scenes.insert(id, scene);
            }
            Err(err) => {
                log::error!("preload of {id} failed: {err}");
                return Err(err);
            }
        }
    }

    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;
    use std::time::Duration;

    fn catalog() -> Vec<VehicleEntry> {
        vec![
            VehicleEntry::new("DaimlerV8", "assets/DaimlerV8.glb"),
            VehicleEntry::new("JaguarXJ8", "assets/JaguarXJ8.glb"),
            VehicleEntry::new("JaguarXJR", "assets/JaguarXJR.glb"),
        ]
    }

    fn stub_scene(path: &str) -> Scene {
        let mut scene = Scene::new();
        scene.add_node(SceneNode::group(path), None);
        scene
    }

    #[tokio::test]
    async fn all_loads_join_into_the_scene_map() {
        let scenes = preload_all(&catalog(), |path| async move { Ok(stub_scene(&path)) })
            .await
            .unwrap();

        assert_eq!(scenes.len(), 3);
        assert!(scenes.contains_key("JaguarXJR"));
    }

    #[tokio::test]
    async fn first_failure_wins_and_rejects_the_join() {
        let result = preload_all(&catalog(), |path| async move {
            if path.contains("XJ8") {
                Err(LoadError::NotFound(path))
            } else {
                // Slow successes that should end up ignored.
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(stub_scene(&path))
            }
        })
        .await;

        match result {
            Err(LoadError::NotFound(path)) => assert!(path.contains("XJ8")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_catalog_yields_empty_map() {
        let scenes = preload_all(&[], |path| async move { Ok(stub_scene(&path)) })
            .await
            .unwrap();
        assert!(scenes.is_empty());
    }
}
