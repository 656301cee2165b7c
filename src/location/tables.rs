//! Static reference data for the resolver.
//!
//! Four precision tiers of centroid tables plus the compound-annotation
//! families. Every table is a `'static` slice: declaration order is
//! significant because the substring and fuzzy stages take the first hit.

use super::types::Coordinate;

/// A canonical name or code and its centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEntry {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl ReferenceEntry {
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Full region name (lower-case) pointing at a region code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionName {
    pub name: &'static str,
    pub code: &'static str,
}

/// A constituent part of a compound annotation such as `UK/Scotland`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubRegion {
    /// Substring searched for after the marker.
    pub token: &'static str,
    pub centroid: ReferenceEntry,
}

/// A `<CountryCode>/<SubRegion>` annotation family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundFamily {
    /// e.g. `"UK/"`
    pub marker: &'static str,
    pub subregions: &'static [SubRegion],
    /// Used when no sub-region token is recognised.
    pub fallback: ReferenceEntry,
}

impl CompoundFamily {
    /// Pick the sub-region centroid named in `annotation`, or the fallback.
    pub fn subregion_for(&self, annotation: &str) -> &ReferenceEntry {
        self.subregions
            .iter()
            .find(|s| annotation.contains(s.token))
            .map(|s| &s.centroid)
            .unwrap_or(&self.fallback)
    }
}

/// The full set of lookup tables a resolver runs against.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTables {
    pub cities: &'static [ReferenceEntry],
    pub region_codes: &'static [ReferenceEntry],
    /// Second region-code namespace, consulted only when no country segment is given.
    pub alt_region_codes: &'static [ReferenceEntry],
    pub region_names: &'static [RegionName],
    pub countries: &'static [ReferenceEntry],
    pub compound_families: &'static [CompoundFamily],
}

static BUILTIN: ReferenceTables = ReferenceTables {
    cities: CITIES,
    region_codes: US_STATES,
    alt_region_codes: CA_PROVINCES,
    region_names: US_STATE_NAMES,
    countries: COUNTRIES,
    compound_families: COMPOUND_FAMILIES,
};

impl ReferenceTables {
    pub fn builtin() -> &'static ReferenceTables {
        &BUILTIN
    }

    /// Resolve a full region name to its region-code entry.
    pub fn region_by_name(&self, lower_name: &str) -> Option<&'static ReferenceEntry> {
        let code = self.region_names.iter().find(|r| r.name == lower_name)?.code;
        lookup(self.region_codes, code)
    }
}

/// Exact, case-sensitive key lookup. First declared entry wins.
pub fn lookup(entries: &'static [ReferenceEntry], key: &str) -> Option<&'static ReferenceEntry> {
    entries.iter().find(|e| e.name == key)
}

const fn e(name: &'static str, lat: f64, lon: f64) -> ReferenceEntry {
    ReferenceEntry { name, lat, lon }
}

const fn r(name: &'static str, code: &'static str) -> RegionName {
    RegionName { name, code }
}

// ─── Cities (highest precision) ─────────────────────────────────

pub const CITIES: &[ReferenceEntry] = &[
    // United Kingdom
    e("London", 51.5074, -0.1278),
    e("Manchester", 53.4808, -2.2426),
    e("Birmingham", 52.4862, -1.8904),
    e("Leeds", 53.8008, -1.5491),
    e("Glasgow", 55.8642, -4.2518),
    e("Edinburgh", 55.9533, -3.1883),
    e("Bristol", 51.4545, -2.5879),
    e("Liverpool", 53.4084, -2.9916),
    e("Sheffield", 53.3811, -1.4701),
    e("Newcastle", 54.9783, -1.6178),
    e("Nottingham", 52.9548, -1.1581),
    e("Southampton", 50.9097, -1.4044),
    e("Brighton", 50.8225, -0.1372),
    e("Cardiff", 51.4816, -3.1791),
    e("Belfast", 54.5973, -5.9301),
    e("Aberdeen", 57.1497, -2.0943),
    e("Dundee", 56.4620, -2.9707),
    e("Oxford", 51.7520, -1.2577),
    e("Cambridge", 52.2053, 0.1218),
    e("York", 53.9600, -1.0873),
    e("Bath", 51.3811, -2.3590),
    e("Canterbury", 51.2802, 1.0789),
    e("Exeter", 50.7184, -3.5339),
    e("Plymouth", 50.3755, -4.1427),
    e("Swansea", 51.6214, -3.9436),
    e("Coventry", 52.4068, -1.5197),
    e("Leicester", 52.6369, -1.1398),
    e("Wolverhampton", 52.5870, -2.1288),
    e("Stoke", 53.0027, -2.1794),
    e("Derby", 52.9225, -1.4746),
    e("Reading", 51.4543, -0.9781),
    e("Milton Keynes", 52.0406, -0.7594),
    e("Sunderland", 54.9069, -1.3838),
    e("Croydon", 51.3762, -0.0982),
    e("Kent", 51.2787, 0.5217),
    e("Surrey", 51.3148, -0.5600),
    e("Essex", 51.7343, 0.4691),
    e("Cornwall", 50.2660, -5.0527),
    e("Devon", 50.7156, -3.5309),
    e("Norfolk", 52.6140, 0.8864),
    e("Suffolk", 52.1872, 0.9708),
    e("Dorset", 50.7488, -2.3445),
    e("Wiltshire", 51.3492, -1.9927),
    e("Hampshire", 51.0577, -1.3081),
    e("Sussex", 50.9225, -0.1388),
    // Australia
    e("Sydney", -33.8688, 151.2093),
    e("Melbourne", -37.8136, 144.9631),
    e("Brisbane", -27.4698, 153.0251),
    e("Perth", -31.9505, 115.8605),
    e("Adelaide", -34.9285, 138.6007),
    e("Canberra", -35.2809, 149.1300),
    e("Hobart", -42.8821, 147.3272),
    e("Darwin", -12.4634, 130.8456),
    // Canada
    e("Toronto", 43.6532, -79.3832),
    e("Vancouver", 49.2827, -123.1207),
    e("Montreal", 45.5017, -73.5673),
    e("Calgary", 51.0447, -114.0719),
    e("Edmonton", 53.5461, -113.4938),
    e("Ottawa", 45.4215, -75.6972),
    e("Winnipeg", 49.8951, -97.1384),
    e("Halifax", 44.6488, -63.5752),
    e("Victoria", 48.4284, -123.3656),
    e("Quebec City", 46.8139, -71.2080),
    // Rest of the world
    e("Dubai", 25.2048, 55.2708),
    e("Abu Dhabi", 24.4539, 54.3773),
    e("Mumbai", 19.0760, 72.8777),
    e("Delhi", 28.7041, 77.1025),
    e("Bangalore", 12.9716, 77.5946),
    e("Hyderabad", 17.3850, 78.4867),
    e("Chennai", 13.0827, 80.2707),
    e("Kolkata", 22.5726, 88.3639),
    e("Pune", 18.5204, 73.8567),
    e("Ahmedabad", 23.0225, 72.5714),
    e("Berlin", 52.5200, 13.4050),
    e("Munich", 48.1351, 11.5820),
    e("Hamburg", 53.5511, 9.9937),
    e("Frankfurt", 50.1109, 8.6821),
    e("Paris", 48.8566, 2.3522),
    e("Lyon", 45.7640, 4.8357),
    e("Marseille", 43.2965, 5.3698),
    e("Rome", 41.9028, 12.4964),
    e("Milan", 45.4642, 9.1900),
    e("Naples", 40.8518, 14.2681),
    e("Madrid", 40.4168, -3.7038),
    e("Barcelona", 41.3874, 2.1686),
    e("Lisbon", 38.7223, -9.1393),
    e("Amsterdam", 52.3676, 4.9041),
    e("Brussels", 50.8503, 4.3517),
    e("Vienna", 48.2082, 16.3738),
    e("Zurich", 47.3769, 8.5417),
    e("Geneva", 46.2044, 6.1432),
    e("Stockholm", 59.3293, 18.0686),
    e("Oslo", 59.9139, 10.7522),
    e("Copenhagen", 55.6761, 12.5683),
    e("Helsinki", 60.1699, 24.9384),
    e("Warsaw", 52.2297, 21.0122),
    e("Prague", 50.0755, 14.4378),
    e("Budapest", 47.4979, 19.0402),
    e("Athens", 37.9838, 23.7275),
    e("Istanbul", 41.0082, 28.9784),
    e("Ankara", 39.9334, 32.8597),
    e("Bangkok", 13.7563, 100.5018),
    e("Kuala Lumpur", 3.1390, 101.6869),
    e("Jakarta", -6.2088, 106.8456),
    e("Manila", 14.5995, 120.9842),
    e("Seoul", 37.5665, 126.9780),
    e("Taipei", 25.0330, 121.5654),
    e("Tokyo", 35.6762, 139.6503),
    e("Osaka", 34.6937, 135.5023),
    e("Beijing", 39.9042, 116.4074),
    e("Shanghai", 31.2304, 121.4737),
    e("Hong Kong", 22.3193, 114.1694),
    e("Tehran", 35.6892, 51.3890),
    e("Baghdad", 33.3152, 44.3661),
    e("Riyadh", 24.7136, 46.6753),
    e("Cairo", 30.0444, 31.2357),
    e("Nairobi", -1.2921, 36.8219),
    e("Lagos", 6.5244, 3.3792),
    e("Johannesburg", -26.2041, 28.0473),
    e("Cape Town", -33.9249, 18.4241),
    e("Lima", -12.0464, -77.0428),
    e("Bogota", 4.7110, -74.0721),
    e("Santiago", -33.4489, -70.6693),
    e("Buenos Aires", -34.6037, -58.3816),
    e("Sao Paulo", -23.5505, -46.6333),
    e("Rio de Janeiro", -22.9068, -43.1729),
    e("Havana", 23.1136, -82.3666),
    e("Nassau", 25.0480, -77.3554),
    e("Kingston", 18.0179, -76.8099),
    e("San Juan", 18.4655, -66.1057),
    e("Islamabad", 33.6844, 73.0479),
    e("Amman", 31.9454, 35.9284),
    // United States (names already listed above are omitted)
    e("New York", 40.7128, -74.0060),
    e("Los Angeles", 34.0522, -118.2437),
    e("Chicago", 41.8781, -87.6298),
    e("Houston", 29.7604, -95.3698),
    e("Phoenix", 33.4484, -112.0740),
    e("Philadelphia", 39.9526, -75.1652),
    e("San Antonio", 29.4241, -98.4936),
    e("San Diego", 32.7157, -117.1611),
    e("Dallas", 32.7767, -96.7970),
    e("San Jose", 37.3382, -121.8863),
    e("Austin", 30.2672, -97.7431),
    e("Jacksonville", 30.3322, -81.6557),
    e("Fort Worth", 32.7555, -97.3308),
    e("Columbus", 39.9612, -82.9988),
    e("San Francisco", 37.7749, -122.4194),
    e("Charlotte", 35.2271, -80.8431),
    e("Indianapolis", 39.7684, -86.1581),
    e("Seattle", 47.6062, -122.3321),
    e("Denver", 39.7392, -104.9903),
    e("Washington", 38.9072, -77.0369),
    e("Nashville", 36.1627, -86.7816),
    e("El Paso", 31.7619, -106.4850),
    e("Boston", 42.3601, -71.0589),
    e("Portland", 45.5152, -122.6784),
    e("Las Vegas", 36.1699, -115.1398),
    e("Memphis", 35.1495, -90.0490),
    e("Louisville", 38.2527, -85.7585),
    e("Baltimore", 39.2904, -76.6122),
    e("Milwaukee", 43.0389, -87.9065),
    e("Albuquerque", 35.0844, -106.6504),
    e("Tucson", 32.2226, -110.9747),
    e("Fresno", 36.7378, -119.7871),
    e("Sacramento", 38.5816, -121.4944),
    e("Mesa", 33.4152, -111.8315),
    e("Kansas City", 39.0997, -94.5786),
    e("Atlanta", 33.7490, -84.3880),
    e("Omaha", 41.2565, -95.9345),
    e("Colorado Springs", 38.8339, -104.8214),
    e("Raleigh", 35.7796, -78.6382),
    e("Long Beach", 33.7701, -118.1937),
    e("Virginia Beach", 36.8529, -75.9780),
    e("Miami", 25.7617, -80.1918),
    e("Oakland", 37.8044, -122.2712),
    e("Minneapolis", 44.9778, -93.2650),
    e("Tulsa", 36.1540, -95.9928),
    e("Tampa", 27.9506, -82.4572),
    e("Arlington", 32.7357, -97.1081),
    e("New Orleans", 29.9511, -90.0715),
    e("Cleveland", 41.4993, -81.6944),
    e("Honolulu", 21.3069, -157.8583),
    e("Anaheim", 33.8366, -117.9143),
    e("Orlando", 28.5383, -81.3792),
    e("St. Louis", 38.6270, -90.1994),
    e("Pittsburgh", 40.4406, -79.9959),
    e("Cincinnati", 39.1031, -84.5120),
    e("Anchorage", 61.2181, -149.9003),
    e("Detroit", 42.3314, -83.0458),
    e("Salt Lake City", 40.7608, -111.8910),
    e("Tacoma", 47.2529, -122.4443),
    e("Spokane", 47.6588, -117.4260),
    e("Boise", 43.6150, -116.2023),
    e("Reno", 39.5296, -119.8138),
    e("Scottsdale", 33.4942, -111.9261),
    e("Chandler", 33.3062, -111.8413),
    e("St. Petersburg", 27.7676, -82.6403),
    e("Buffalo", 42.8864, -78.8784),
    e("Rochester", 43.1566, -77.6088),
    e("Syracuse", 43.0481, -76.1474),
    e("Albany", 42.6526, -73.7562),
    e("Dayton", 39.7589, -84.1916),
    e("Akron", 41.0814, -81.5190),
    e("Madison", 43.0731, -89.4012),
    e("Lexington", 38.0406, -84.5037),
    e("Knoxville", 35.9606, -83.9207),
    e("Chattanooga", 35.0456, -85.3097),
    e("Springfield", 39.7817, -89.6501),
    e("Little Rock", 34.7465, -92.2896),
    e("Baton Rouge", 30.4515, -91.1871),
    e("Mobile", 30.6954, -88.0399),
    e("Des Moines", 41.5868, -93.6250),
    e("Wichita", 37.6872, -97.3301),
    e("Columbia", 34.0007, -81.0348),
    e("Charleston", 32.7765, -79.9311),
    e("Savannah", 32.0809, -81.0912),
    e("Providence", 41.8240, -71.4128),
    e("Hartford", 41.7658, -72.6734),
    e("Wilmington", 34.2257, -77.9447),
    e("Fargo", 46.8772, -96.7898),
    e("Sioux Falls", 43.5446, -96.7311),
    e("Billings", 45.7833, -108.5007),
    e("Cheyenne", 41.1400, -104.8202),
    e("Burlington", 44.4759, -73.2121),
    e("Concord", 43.2081, -71.5376),
    e("Dover", 39.1582, -75.5244),
    e("Annapolis", 38.9784, -76.4922),
    e("Juneau", 58.3005, -134.4197),
    e("Helena", 46.5891, -112.0391),
    e("Pierre", 44.3683, -100.3510),
    e("Bismarck", 46.8083, -100.7837),
    e("Santa Fe", 35.6870, -105.9378),
    e("Carson City", 39.1638, -119.7674),
    e("Olympia", 47.0379, -122.9007),
    e("Salem", 44.9429, -123.0351),
    e("Topeka", 39.0473, -95.6752),
    e("Oklahoma City", 35.4676, -97.5164),
    e("Lincoln", 40.8136, -96.7026),
    e("Jackson", 32.2988, -90.1848),
    e("Montgomery", 32.3792, -86.3077),
    e("Tallahassee", 30.4383, -84.2807),
    e("Richmond", 37.5407, -77.4360),
    e("Harrisburg", 40.2732, -76.8867),
    e("Trenton", 40.2171, -74.7429),
    e("Lansing", 42.7325, -84.5555),
    e("Frankfort", 38.2009, -84.8733),
    e("Jefferson City", 38.5768, -92.1735),
    e("Montpelier", 44.2601, -72.5754),
    e("Augusta", 44.3106, -69.7795),
];

// ─── Region codes (medium precision) ────────────────────────────

pub const US_STATES: &[ReferenceEntry] = &[
    e("AL", 32.806671, -86.791130),
    e("AK", 61.370716, -152.404419),
    e("AZ", 33.729759, -111.431221),
    e("AR", 34.969704, -92.373123),
    e("CA", 36.116203, -119.681564),
    e("CO", 39.059811, -105.311104),
    e("CT", 41.597782, -72.755371),
    e("DE", 39.318523, -75.507141),
    e("FL", 27.766279, -81.686783),
    e("GA", 33.040619, -83.643074),
    e("HI", 21.094318, -157.498337),
    e("ID", 44.240459, -114.478828),
    e("IL", 40.349457, -88.986137),
    e("IN", 39.849426, -86.258278),
    e("IA", 42.011539, -93.210526),
    e("KS", 38.526600, -96.726486),
    e("KY", 37.668140, -84.670067),
    e("LA", 31.169546, -91.867805),
    e("ME", 44.693947, -69.381927),
    e("MD", 39.063946, -76.802101),
    e("MA", 42.230171, -71.530106),
    e("MI", 43.326618, -84.536095),
    e("MN", 45.694454, -93.900192),
    e("MS", 32.741646, -89.678696),
    e("MO", 38.456085, -92.288368),
    e("MT", 46.921925, -110.454353),
    e("NE", 41.125370, -98.268082),
    e("NV", 38.313515, -117.055374),
    e("NH", 43.452492, -71.563896),
    e("NJ", 40.298904, -74.521011),
    e("NM", 34.840515, -106.248482),
    e("NY", 42.165726, -74.948051),
    e("NC", 35.630066, -79.806419),
    e("ND", 47.528912, -99.784012),
    e("OH", 40.388783, -82.764915),
    e("OK", 35.565342, -96.928917),
    e("OR", 44.572021, -122.070938),
    e("PA", 40.590752, -77.209755),
    e("RI", 41.680893, -71.511780),
    e("SC", 33.856892, -80.945007),
    e("SD", 44.299782, -99.438828),
    e("TN", 35.747845, -86.692345),
    e("TX", 31.054487, -97.563461),
    e("UT", 40.150032, -111.862434),
    e("VT", 44.045876, -72.710686),
    e("VA", 37.769337, -78.169968),
    e("WA", 47.400902, -121.490494),
    e("WV", 38.491226, -80.954453),
    e("WI", 44.268543, -89.616508),
    e("WY", 42.755966, -107.302490),
    e("DC", 38.897438, -77.026817),
    e("PR", 18.220833, -66.590149),
    e("VI", 18.335765, -64.896335),
    e("GU", 13.444304, 144.793731),
];

pub const CA_PROVINCES: &[ReferenceEntry] = &[
    e("ON", 51.2538, -85.3232),
    e("QC", 52.9399, -73.5491),
    e("BC", 53.7267, -127.6476),
    e("AB", 53.9333, -116.5765),
    e("MB", 53.7609, -98.8139),
    e("SK", 52.9399, -106.4509),
    e("NS", 44.6820, -63.7443),
    e("NB", 46.5653, -66.4619),
    e("NL", 53.1355, -57.6604),
    e("PE", 46.5107, -63.4168),
    e("NT", 64.8255, -124.8457),
    e("YT", 64.2823, -135.0000),
    e("NU", 70.2998, -83.1076),
];

pub const US_STATE_NAMES: &[RegionName] = &[
    r("alabama", "AL"),
    r("alaska", "AK"),
    r("arizona", "AZ"),
    r("arkansas", "AR"),
    r("california", "CA"),
    r("colorado", "CO"),
    r("connecticut", "CT"),
    r("delaware", "DE"),
    r("florida", "FL"),
    r("georgia", "GA"),
    r("hawaii", "HI"),
    r("idaho", "ID"),
    r("illinois", "IL"),
    r("indiana", "IN"),
    r("iowa", "IA"),
    r("kansas", "KS"),
    r("kentucky", "KY"),
    r("louisiana", "LA"),
    r("maine", "ME"),
    r("maryland", "MD"),
    r("massachusetts", "MA"),
    r("michigan", "MI"),
    r("minnesota", "MN"),
    r("mississippi", "MS"),
    r("missouri", "MO"),
    r("montana", "MT"),
    r("nebraska", "NE"),
    r("nevada", "NV"),
    r("new hampshire", "NH"),
    r("new jersey", "NJ"),
    r("new mexico", "NM"),
    r("new york", "NY"),
    r("north carolina", "NC"),
    r("north dakota", "ND"),
    r("ohio", "OH"),
    r("oklahoma", "OK"),
    r("oregon", "OR"),
    r("pennsylvania", "PA"),
    r("rhode island", "RI"),
    r("south carolina", "SC"),
    r("south dakota", "SD"),
    r("tennessee", "TN"),
    r("texas", "TX"),
    r("utah", "UT"),
    r("vermont", "VT"),
    r("virginia", "VA"),
    r("washington", "WA"),
    r("west virginia", "WV"),
    r("wisconsin", "WI"),
    r("wyoming", "WY"),
    r("district of columbia", "DC"),
    r("puerto rico", "PR"),
];

// ─── Countries (lowest precision) ───────────────────────────────

pub const COUNTRIES: &[ReferenceEntry] = &[
    e("USA", 39.8283, -98.5795),
    e("Canada", 56.1304, -106.3468),
    e("UK", 55.3781, -3.4360),
    e("Australia", -25.2744, 133.7751),
    e("Germany", 51.1657, 10.4515),
    e("France", 46.2276, 2.2137),
    e("India", 20.5937, 78.9629),
    e("Brazil", -14.2350, -51.9253),
    e("Mexico", 23.6345, -102.5528),
    e("Japan", 36.2048, 138.2529),
    e("China", 35.8617, 104.1954),
    e("Russia", 61.5240, 105.3188),
    e("Italy", 41.8719, 12.5674),
    e("Spain", 40.4637, -3.7492),
    e("Netherlands", 52.1326, 5.2913),
    e("Sweden", 60.1282, 18.6435),
    e("Norway", 60.4720, 8.4689),
    e("Denmark", 56.2639, 9.5018),
    e("Finland", 61.9241, 25.7482),
    e("Poland", 51.9194, 19.1451),
    e("Ireland", 53.1424, -7.6921),
    e("New Zealand", -40.9006, 174.8860),
    e("South Africa", -30.5595, 22.9375),
    e("Argentina", -38.4161, -63.6167),
    e("Chile", -35.6751, -71.5430),
    e("Colombia", 4.5709, -74.2973),
    e("Turkey", 38.9637, 35.2433),
    e("Greece", 39.0742, 21.8243),
    e("Portugal", 39.3999, -8.2245),
    e("Belgium", 50.8503, 4.3517),
    e("Austria", 47.5162, 14.5501),
    e("Switzerland", 46.8182, 8.2275),
    e("Philippines", 12.8797, 121.7740),
    e("Indonesia", -0.7893, 113.9213),
    e("Thailand", 15.8700, 100.9925),
    e("Singapore", 1.3521, 103.8198),
    e("South Korea", 35.9078, 127.7669),
    e("Israel", 31.0461, 34.8516),
    e("Egypt", 26.8206, 30.8025),
    e("Puerto Rico", 18.2208, -66.5901),
    e("United Kingdom", 55.3781, -3.4360),
    e("England", ENGLAND.lat, ENGLAND.lon),
    e("Scotland", SCOTLAND.lat, SCOTLAND.lon),
    e("Wales", WALES.lat, WALES.lon),
    e("Northern Ireland", NORTHERN_IRELAND.lat, NORTHERN_IRELAND.lon),
    e("Morocco", 31.7917, -7.0926),
    e("Panama", 8.5380, -80.7821),
    e("Bahamas", 25.0343, -77.3963),
    e("Botswana", -22.3285, 24.6849),
    e("Pakistan", 30.3753, 69.3451),
    e("Iran", 32.4279, 53.6880),
    e("Iraq", 33.2232, 43.6793),
    e("Bulgaria", 42.7339, 25.4858),
    e("Syria", 34.8021, 38.9968),
    e("Lebanon", 33.8547, 35.8623),
    e("Malaysia", 4.2105, 101.9758),
    e("Peru", -9.1900, -75.0152),
    e("Jordan", 30.5852, 36.2384),
    e("Bermuda", 32.3078, -64.7505),
    e("Cuba", 21.5218, -77.7812),
    e("Jamaica", 18.1096, -77.2975),
    e("Costa Rica", 9.7489, -83.7534),
    e("Guatemala", 15.7835, -90.2308),
    e("Honduras", 15.2000, -86.2419),
    e("Nicaragua", 12.8654, -85.2072),
    e("El Salvador", 13.7942, -88.8965),
    e("Dominican Republic", 18.7357, -70.1627),
    e("Trinidad", 10.6918, -61.2225),
    e("Barbados", 13.1939, -59.5432),
    e("Venezuela", 6.4238, -66.5897),
    e("Ecuador", -1.8312, -78.1834),
    e("Bolivia", -16.2902, -63.5887),
    e("Paraguay", -23.4425, -58.4438),
    e("Uruguay", -32.5228, -55.7658),
    e("Croatia", 45.1000, 15.2000),
    e("Czech Republic", 49.8175, 15.4730),
    e("Czechia", 49.8175, 15.4730),
    e("Romania", 45.9432, 24.9668),
    e("Hungary", 47.1625, 19.5033),
    e("Slovakia", 48.6690, 19.6990),
    e("Serbia", 44.0165, 21.0059),
    e("Slovenia", 46.1512, 14.9955),
    e("Bosnia", 43.9159, 17.6791),
    e("Montenegro", 42.7087, 19.3744),
    e("Albania", 41.1533, 20.1683),
    e("North Macedonia", 41.5122, 21.7453),
    e("Macedonia", 41.5122, 21.7453),
    e("Kosovo", 42.6026, 20.9030),
    e("Lithuania", 55.1694, 23.8813),
    e("Latvia", 56.8796, 24.6032),
    e("Estonia", 58.5953, 25.0136),
    e("Ukraine", 48.3794, 31.1656),
    e("Belarus", 53.7098, 27.9534),
    e("Moldova", 47.4116, 28.3699),
    e("Iceland", 64.9631, -19.0208),
    e("Cyprus", 35.1264, 33.4299),
    e("Malta", 35.9375, 14.3754),
    e("Luxembourg", 49.8153, 6.1296),
    e("Taiwan", 23.6978, 120.9605),
    e("Vietnam", 14.0583, 108.2772),
    e("Cambodia", 12.5657, 104.9910),
    e("Myanmar", 21.9162, 95.9560),
    e("Bangladesh", 23.6850, 90.3563),
    e("Sri Lanka", 7.8731, 80.7718),
    e("Nepal", 28.3949, 84.1240),
    e("Afghanistan", 33.9391, 67.7100),
    e("Saudi Arabia", 23.8859, 45.0792),
    e("UAE", 23.4241, 53.8478),
    e("United Arab Emirates", 23.4241, 53.8478),
    e("Qatar", 25.3548, 51.1839),
    e("Kuwait", 29.3117, 47.4818),
    e("Oman", 21.4735, 55.9754),
    e("Bahrain", 26.0667, 50.5577),
    e("Yemen", 15.5527, 48.5164),
    e("Kenya", -0.0236, 37.9062),
    e("Nigeria", 9.0820, 8.6753),
    e("Ghana", 7.9465, -1.0232),
    e("Ethiopia", 9.1450, 40.4897),
    e("Tanzania", -6.3690, 34.8888),
    e("Uganda", 1.3733, 32.2903),
    e("Rwanda", -1.9403, 29.8739),
    e("Mozambique", -18.6657, 35.5296),
    e("Zimbabwe", -19.0154, 29.1549),
    e("Zambia", -13.1339, 27.8493),
    e("Namibia", -22.9576, 18.4904),
    e("Congo", -4.0383, 21.7587),
    e("Tunisia", 33.8869, 9.5375),
    e("Algeria", 28.0339, 1.6596),
    e("Libya", 26.3351, 17.2283),
    e("Sudan", 12.8628, 30.2176),
    e("Pacific Ocean", 0.0, -160.0),
    e("Atlantic Ocean", 14.5994, -28.6731),
    e("Caribbean", 14.5, -75.0),
];

// ─── Compound annotations ───────────────────────────────────────

const ENGLAND: ReferenceEntry = e("England", 52.3555, -1.1743);
const SCOTLAND: ReferenceEntry = e("Scotland", 56.4907, -4.2026);
const WALES: ReferenceEntry = e("Wales", 52.1307, -3.7837);
const NORTHERN_IRELAND: ReferenceEntry = e("Northern Ireland", 54.7877, -6.4923);

pub const COMPOUND_FAMILIES: &[CompoundFamily] = &[CompoundFamily {
    marker: "UK/",
    subregions: &[
        SubRegion { token: "Scotland", centroid: SCOTLAND },
        SubRegion { token: "Wales", centroid: WALES },
        SubRegion { token: "Ireland", centroid: NORTHERN_IRELAND },
    ],
    fallback: ENGLAND,
}];
