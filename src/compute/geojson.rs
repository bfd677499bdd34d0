//! GeoJSON export of the events visible through a layer.

use crate::error::{FilterError, Result};
use crate::filter::{LayerSpec, PointInstance};
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, json};
use strikeview_types::dataset::Dataset;

/// Converts a draw instance to a GeoJSON Feature.
///
/// Properties: `time`, `peak_current`, `radius` (scaled) and `opacity`.
pub fn instance_to_feature(instance: &PointInstance, layer: &LayerSpec) -> Feature {
    let geom = Geometry::new(Value::Point(vec![
        instance.position.x(),
        instance.position.y(),
    ]));

    let mut props = Map::new();
    props.insert("time".to_string(), json!(instance.time));
    props.insert("peak_current".to_string(), json!(instance.radius));
    props.insert("radius".to_string(), json!(layer.scaled_radius(instance)));
    props.insert("opacity".to_string(), json!(instance.opacity));

    Feature {
        bbox: None,
        geometry: Some(geom),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Converts every event visible through `layer` to a FeatureCollection.
///
/// # Examples
///
/// ```
/// use strikeview::compute::geojson::layer_to_feature_collection;
/// use strikeview::{Dataset, Event, TimeFilter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut filter = TimeFilter::new();
/// filter.load_dataset(Dataset::new(vec![Event::new(1.0, 24.9, 60.2, 7.0)]))?;
///
/// let json = layer_to_feature_collection(&filter.layer()?, filter.dataset().unwrap())?;
/// assert!(json.contains("FeatureCollection"));
/// # Ok(())
/// # }
/// ```
pub fn layer_to_feature_collection(layer: &LayerSpec, dataset: &Dataset) -> Result<String> {
    let features: Vec<Feature> = layer
        .instances(dataset)
        .map(|instance| instance_to_feature(&instance, layer))
        .collect();

    let collection = FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    };

    serde_json::to_string(&collection).map_err(|e| {
        FilterError::SerializationErrorWithContext(format!(
            "Failed to serialize feature collection: {}",
            e
        ))
    })
}
