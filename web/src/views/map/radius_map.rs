use demographics::{Coordinates, MapCircle};
use leptos::prelude::*;
use leptos_leaflet::prelude::*;

use crate::utils::format::format_count;

const METERS_PER_MILE: f64 = 1609.344;

/// Leaflet map with the geocoded point and one ring per radius. The rings
/// come straight from the payload's `map_circles`; population labels and
/// colors are pass-through.
#[component]
pub fn RadiusMap(coordinates: Coordinates, circles: Vec<MapCircle>) -> impl IntoView {
    let center = Position::new(coordinates.lat, coordinates.lng);
    let matched = coordinates
        .matched_address
        .clone()
        .unwrap_or_else(|| "Geocoded location".to_string());

    view! {
        <div class="report-map">
            <MapContainer
                style="height: 420px; width: 100%;"
                center=center
                zoom=11.0
                set_view=true
            >
                <TileLayer
                    url="https://tile.openstreetmap.org/{z}/{x}/{y}.png"
                    attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                />

                <Marker position=center>
                    <Popup>
                        <p>{matched}</p>
                    </Popup>
                </Marker>

                {circles.into_iter().map(|circle| {
                    let props = circle.properties;
                    // GeoJSON axis order is [lng, lat].
                    let ring_center = if props.center.len() == 2 {
                        Position::new(props.center[1], props.center[0])
                    } else {
                        Position::new(coordinates.lat, coordinates.lng)
                    };
                    let radius_meters = props.radius_miles * METERS_PER_MILE;
                    let color = props.color.clone().unwrap_or_else(|| "#45B7D1".to_string());
                    let population = props
                        .population_formatted
                        .clone()
                        .unwrap_or_else(|| format_count(props.population as f64));
                    let label = format!(
                        "{} mi radius \u{2022} {} residents",
                        props.radius_miles, population
                    );

                    view! {
                        <Circle
                            center=ring_center
                            radius=radius_meters
                            color=color
                        >
                            <Tooltip>
                                <p>{label}</p>
                            </Tooltip>
                        </Circle>
                    }
                }).collect_view()}
            </MapContainer>
        </div>
    }
}
