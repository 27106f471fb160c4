//! The default base-layer table.
//!
//! Order matters: hosts present entries in this order and treat the first
//! as the initial selection.

use super::descriptor::{RelayPolicy, SourceDescriptor};
use crate::provider::{BingMapsStyle, ImageSource, ProviderConfig};

const BING_URL: &str = "http://dev.virtualearth.net";
const STAMEN_CREDIT: &str =
    "Map tiles by Stamen Design, under CC BY 3.0. Data by OpenStreetMap, under CC BY SA.";

/// Bundled low-resolution world texture used when streaming is disabled.
pub const SINGLE_TILE_ASSET: &str = "Assets/Textures/NE2_LR_LC_SR_W_DR_2048.jpg";

/// Built-in imagery sources.
// ESRI services are always relayed: their servers do not answer direct
// cross-origin reads.
pub const DEFAULT_SOURCES: &[SourceDescriptor] = &[
    SourceDescriptor {
        name: "Bing Maps Aerial",
        icon: "Widgets/Images/ImageryProviders/bingAerial.png",
        tooltip: "Bing Maps aerial imagery \nhttp://www.bing.com/maps",
        provider: ProviderConfig::BingMaps {
            url: BING_URL,
            style: BingMapsStyle::Aerial,
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "Bing Maps Aerial with Labels",
        icon: "Widgets/Images/ImageryProviders/bingAerialLabels.png",
        tooltip: "Bing Maps aerial imagery with label overlays \nhttp://www.bing.com/maps",
        provider: ProviderConfig::BingMaps {
            url: BING_URL,
            style: BingMapsStyle::AerialWithLabels,
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "Bing Maps Roads",
        icon: "Widgets/Images/ImageryProviders/bingRoads.png",
        tooltip: "Bing Maps standard road maps\nhttp://www.bing.com/maps",
        provider: ProviderConfig::BingMaps {
            url: BING_URL,
            style: BingMapsStyle::Road,
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "ESRI World Imagery",
        icon: "Widgets/Images/ImageryProviders/esriWorldImagery.png",
        tooltip: "\
World Imagery provides one meter or better satellite and aerial imagery in many parts of the world and lower resolution \
satellite imagery worldwide.  The map includes NASA Blue Marble: Next Generation 500m resolution imagery at small scales \
(above 1:1,000,000), i-cubed 15m eSAT imagery at medium-to-large scales (down to 1:70,000) for the world, and USGS 15m Landsat \
imagery for Antarctica. The map features 0.3m resolution imagery in the continental United States and 0.6m resolution imagery in \
parts of Western Europe from DigitalGlobe. In other parts of the world, 1 meter resolution imagery is available from GeoEye IKONOS, \
i-cubed Nationwide Prime, Getmapping, AeroGRID, IGN Spain, and IGP Portugal.  Additionally, imagery at different resolutions has been \
contributed by the GIS User Community.\nhttp://www.esri.com",
        provider: ProviderConfig::ArcGisMapServer {
            url: "http://services.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer",
        },
        relay: RelayPolicy::Always,
    },
    SourceDescriptor {
        name: "ESRI World Street Map",
        icon: "Widgets/Images/ImageryProviders/esriWorldStreetMap.png",
        tooltip: "\
This worldwide street map presents highway-level data for the world. Street-level data includes the United States; much of \
Canada; Japan; most countries in Europe; Australia and New Zealand; India; parts of South America including Argentina, Brazil, \
Chile, Colombia, and Venezuela; Ghana; and parts of southern Africa including Botswana, Lesotho, Namibia, South Africa, and Swaziland.\n\
http://www.esri.com",
        provider: ProviderConfig::ArcGisMapServer {
            url: "http://services.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer",
        },
        relay: RelayPolicy::Always,
    },
    SourceDescriptor {
        name: "ESRI National Geographic",
        icon: "Widgets/Images/ImageryProviders/esriNationalGeographic.png",
        tooltip: "\
This web map contains the National Geographic World Map service. This map service is designed to be used as a general reference map \
for informational and educational purposes as well as a basemap by GIS professionals and other users for creating web maps and web \
mapping applications.\nhttp://www.esri.com",
        provider: ProviderConfig::ArcGisMapServer {
            url: "http://services.arcgisonline.com/ArcGIS/rest/services/NatGeo_World_Map/MapServer/",
        },
        relay: RelayPolicy::Always,
    },
    SourceDescriptor {
        name: "Open\u{00AD}Street\u{00AD}Map",
        icon: "Widgets/Images/ImageryProviders/openStreetMap.png",
        tooltip: "OpenStreetMap (OSM) is a collaborative project to create a free editable map \
of the world.\nhttp://www.openstreetmap.org",
        provider: ProviderConfig::OpenStreetMap {
            url: "http://tile.openstreetmap.org/",
            credit: None,
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "Stamen Watercolor",
        icon: "Widgets/Images/ImageryProviders/stamenWatercolor.png",
        tooltip: "Reminiscent of hand drawn maps, Stamen watercolor maps apply raster effect \
area washes and organic edges over a paper texture to add warm pop to any map.\nhttp://maps.stamen.com",
        provider: ProviderConfig::OpenStreetMap {
            url: "http://tile.stamen.com/watercolor/",
            credit: Some(STAMEN_CREDIT),
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "Stamen Toner",
        icon: "Widgets/Images/ImageryProviders/stamenToner.png",
        tooltip: "A high contrast black and white map.\nhttp://maps.stamen.com",
        provider: ProviderConfig::OpenStreetMap {
            url: "http://tile.stamen.com/toner/",
            credit: Some(STAMEN_CREDIT),
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "MapQuest Open\u{00AD}Street\u{00AD}Map",
        icon: "Widgets/Images/ImageryProviders/mapQuestOpenStreetMap.png",
        tooltip: "OpenStreetMap (OSM) is a collaborative project to create a free editable \
map of the world.\nhttp://www.openstreetmap.org",
        provider: ProviderConfig::OpenStreetMap {
            url: "http://otile1.mqcdn.com/tiles/1.0.0/osm/",
            credit: None,
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "The Black Marble",
        icon: "Widgets/Images/ImageryProviders/blackMarble.png",
        tooltip: "The lights of cities and villages trace the outlines of civilization in this global view of the \
Earth at night as seen by NASA/NOAA's Suomi NPP satellite.",
        provider: ProviderConfig::TileMapService {
            url: "http://cesium.agi.com/blackmarble",
            max_zoom: Some(8),
            credit: Some("Black Marble imagery courtesy NASA Earth Observatory"),
        },
        relay: RelayPolicy::IfNeeded,
    },
    SourceDescriptor {
        name: "Disable Streaming Imagery",
        icon: "Widgets/Images/ImageryProviders/singleTile.png",
        tooltip: "Uses a single image for the entire world.",
        provider: ProviderConfig::SingleTile {
            image: ImageSource::Asset(SINGLE_TILE_ASSET),
            credit: None,
        },
        relay: RelayPolicy::Never,
    },
];
