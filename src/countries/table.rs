//! ISO-3166-1 reference table: display name, alpha-3 code and continent.
//!
//! Display names are the ISO-3166 short names the export uses.

use super::Continent::{self, *};

pub(crate) static COUNTRIES: &[(&str, &str, Option<Continent>)] = &[
    ("Afghanistan", "AFG", Some(Asia)),
    ("Åland Islands", "ALA", Some(Europe)),
    ("Albania", "ALB", Some(Europe)),
    ("Algeria", "DZA", Some(Africa)),
    ("American Samoa", "ASM", Some(Oceania)),
    ("Andorra", "AND", Some(Europe)),
    ("Angola", "AGO", Some(Africa)),
    ("Anguilla", "AIA", Some(NorthAmerica)),
    ("Antarctica", "ATA", Some(Antarctica)),
    ("Antigua and Barbuda", "ATG", Some(NorthAmerica)),
    ("Argentina", "ARG", Some(SouthAmerica)),
    ("Armenia", "ARM", Some(Asia)),
    ("Aruba", "ABW", Some(NorthAmerica)),
    ("Australia", "AUS", Some(Oceania)),
    ("Austria", "AUT", Some(Europe)),
    ("Azerbaijan", "AZE", Some(Asia)),
    ("Bahamas", "BHS", Some(NorthAmerica)),
    ("Bahrain", "BHR", Some(Asia)),
    ("Bangladesh", "BGD", Some(Asia)),
    ("Barbados", "BRB", Some(NorthAmerica)),
    ("Belarus", "BLR", Some(Europe)),
    ("Belgium", "BEL", Some(Europe)),
    ("Belize", "BLZ", Some(NorthAmerica)),
    ("Benin", "BEN", Some(Africa)),
    ("Bermuda", "BMU", Some(NorthAmerica)),
    ("Bhutan", "BTN", Some(Asia)),
    ("Bolivia, Plurinational State of", "BOL", Some(SouthAmerica)),
    ("Bonaire, Sint Eustatius and Saba", "BES", Some(NorthAmerica)),
    ("Bosnia and Herzegovina", "BIH", Some(Europe)),
    ("Botswana", "BWA", Some(Africa)),
    ("Bouvet Island", "BVT", None),
    ("Brazil", "BRA", Some(SouthAmerica)),
    ("British Indian Ocean Territory", "IOT", Some(Asia)),
    ("Brunei Darussalam", "BRN", Some(Asia)),
    ("Bulgaria", "BGR", Some(Europe)),
    ("Burkina Faso", "BFA", Some(Africa)),
    ("Burundi", "BDI", Some(Africa)),
    ("Cambodia", "KHM", Some(Asia)),
    ("Cameroon", "CMR", Some(Africa)),
    ("Canada", "CAN", Some(NorthAmerica)),
    ("Cabo Verde", "CPV", Some(Africa)),
    ("Cayman Islands", "CYM", Some(NorthAmerica)),
    ("Central African Republic", "CAF", Some(Africa)),
    ("Chad", "TCD", Some(Africa)),
    ("Chile", "CHL", Some(SouthAmerica)),
    ("China", "CHN", Some(Asia)),
    ("Christmas Island", "CXR", Some(Oceania)),
    ("Cocos (Keeling) Islands", "CCK", Some(Oceania)),
    ("Colombia", "COL", Some(SouthAmerica)),
    ("Comoros", "COM", Some(Africa)),
    ("Congo", "COG", Some(Africa)),
    ("Congo, Democratic Republic of the", "COD", Some(Africa)),
    ("Cook Islands", "COK", Some(Oceania)),
    ("Costa Rica", "CRI", Some(NorthAmerica)),
    ("Côte d'Ivoire", "CIV", Some(Africa)),
    ("Croatia", "HRV", Some(Europe)),
    ("Cuba", "CUB", Some(NorthAmerica)),
    ("Curaçao", "CUW", Some(NorthAmerica)),
    ("Cyprus", "CYP", Some(Asia)),
    ("Czechia", "CZE", Some(Europe)),
    ("Denmark", "DNK", Some(Europe)),
    ("Djibouti", "DJI", Some(Africa)),
    ("Dominica", "DMA", Some(NorthAmerica)),
    ("Dominican Republic", "DOM", Some(NorthAmerica)),
    ("Ecuador", "ECU", Some(SouthAmerica)),
    ("Egypt", "EGY", Some(Africa)),
    ("El Salvador", "SLV", Some(NorthAmerica)),
    ("Equatorial Guinea", "GNQ", Some(Africa)),
    ("Eritrea", "ERI", Some(Africa)),
    ("Estonia", "EST", Some(Europe)),
    ("Eswatini", "SWZ", Some(Africa)),
    ("Ethiopia", "ETH", Some(Africa)),
    ("Falkland Islands (Malvinas)", "FLK", Some(SouthAmerica)),
    ("Faroe Islands", "FRO", Some(Europe)),
    ("Fiji", "FJI", Some(Oceania)),
    ("Finland", "FIN", Some(Europe)),
    ("France", "FRA", Some(Europe)),
    ("French Guiana", "GUF", Some(SouthAmerica)),
    ("French Polynesia", "PYF", Some(Oceania)),
    ("French Southern Territories", "ATF", None),
    ("Gabon", "GAB", Some(Africa)),
    ("Gambia", "GMB", Some(Africa)),
    ("Georgia", "GEO", Some(Asia)),
    ("Germany", "DEU", Some(Europe)),
    ("Ghana", "GHA", Some(Africa)),
    ("Gibraltar", "GIB", Some(Europe)),
    ("Greece", "GRC", Some(Europe)),
    ("Greenland", "GRL", Some(NorthAmerica)),
    ("Grenada", "GRD", Some(NorthAmerica)),
    ("Guadeloupe", "GLP", Some(NorthAmerica)),
    ("Guam", "GUM", Some(Oceania)),
    ("Guatemala", "GTM", Some(NorthAmerica)),
    ("Guernsey", "GGY", Some(Europe)),
    ("Guinea", "GIN", Some(Africa)),
    ("Guinea-Bissau", "GNB", Some(Africa)),
    ("Guyana", "GUY", Some(SouthAmerica)),
    ("Haiti", "HTI", Some(NorthAmerica)),
    ("Heard Island and McDonald Islands", "HMD", None),
    ("Holy See", "VAT", Some(Europe)),
    ("Honduras", "HND", Some(NorthAmerica)),
    ("Hong Kong", "HKG", Some(Asia)),
    ("Hungary", "HUN", Some(Europe)),
    ("Iceland", "ISL", Some(Europe)),
    ("India", "IND", Some(Asia)),
    ("Indonesia", "IDN", Some(Asia)),
    ("Iran, Islamic Republic of", "IRN", Some(Asia)),
    ("Iraq", "IRQ", Some(Asia)),
    ("Ireland", "IRL", Some(Europe)),
    ("Isle of Man", "IMN", Some(Europe)),
    ("Israel", "ISR", Some(Asia)),
    ("Italy", "ITA", Some(Europe)),
    ("Jamaica", "JAM", Some(NorthAmerica)),
    ("Japan", "JPN", Some(Asia)),
    ("Jersey", "JEY", Some(Europe)),
    ("Jordan", "JOR", Some(Asia)),
    ("Kazakhstan", "KAZ", Some(Asia)),
    ("Kenya", "KEN", Some(Africa)),
    ("Kiribati", "KIR", Some(Oceania)),
    ("Korea, Democratic People's Republic of", "PRK", Some(Asia)),
    ("Korea, Republic of", "KOR", Some(Asia)),
    ("Kuwait", "KWT", Some(Asia)),
    ("Kyrgyzstan", "KGZ", Some(Asia)),
    ("Lao People's Democratic Republic", "LAO", Some(Asia)),
    ("Latvia", "LVA", Some(Europe)),
    ("Lebanon", "LBN", Some(Asia)),
    ("Lesotho", "LSO", Some(Africa)),
    ("Liberia", "LBR", Some(Africa)),
    ("Libya", "LBY", Some(Africa)),
    ("Liechtenstein", "LIE", Some(Europe)),
    ("Lithuania", "LTU", Some(Europe)),
    ("Luxembourg", "LUX", Some(Europe)),
    ("Macao", "MAC", Some(Asia)),
    ("North Macedonia", "MKD", Some(Europe)),
    ("Madagascar", "MDG", Some(Africa)),
    ("Malawi", "MWI", Some(Africa)),
    ("Malaysia", "MYS", Some(Asia)),
    ("Maldives", "MDV", Some(Asia)),
    ("Mali", "MLI", Some(Africa)),
    ("Malta", "MLT", Some(Europe)),
    ("Marshall Islands", "MHL", Some(Oceania)),
    ("Martinique", "MTQ", Some(NorthAmerica)),
    ("Mauritania", "MRT", Some(Africa)),
    ("Mauritius", "MUS", Some(Africa)),
    ("Mayotte", "MYT", Some(Africa)),
    ("Mexico", "MEX", Some(NorthAmerica)),
    ("Micronesia, Federated States of", "FSM", Some(Oceania)),
    ("Moldova, Republic of", "MDA", Some(Europe)),
    ("Monaco", "MCO", Some(Europe)),
    ("Mongolia", "MNG", Some(Asia)),
    ("Montenegro", "MNE", Some(Europe)),
    ("Montserrat", "MSR", Some(NorthAmerica)),
    ("Morocco", "MAR", Some(Africa)),
    ("Mozambique", "MOZ", Some(Africa)),
    ("Myanmar", "MMR", Some(Asia)),
    ("Namibia", "NAM", Some(Africa)),
    ("Nauru", "NRU", Some(Oceania)),
    ("Nepal", "NPL", Some(Asia)),
    ("Netherlands", "NLD", Some(Europe)),
    ("New Caledonia", "NCL", Some(Oceania)),
    ("New Zealand", "NZL", Some(Oceania)),
    ("Nicaragua", "NIC", Some(NorthAmerica)),
    ("Niger", "NER", Some(Africa)),
    ("Nigeria", "NGA", Some(Africa)),
    ("Niue", "NIU", Some(Oceania)),
    ("Norfolk Island", "NFK", Some(Oceania)),
    ("Northern Mariana Islands", "MNP", Some(Oceania)),
    ("Norway", "NOR", Some(Europe)),
    ("Oman", "OMN", Some(Asia)),
    ("Pakistan", "PAK", Some(Asia)),
    ("Palau", "PLW", Some(Oceania)),
    ("Palestine, State of", "PSE", Some(Asia)),
    ("Panama", "PAN", Some(NorthAmerica)),
    ("Papua New Guinea", "PNG", Some(Oceania)),
    ("Paraguay", "PRY", Some(SouthAmerica)),
    ("Peru", "PER", Some(SouthAmerica)),
    ("Philippines", "PHL", Some(Asia)),
    ("Pitcairn", "PCN", Some(Oceania)),
    ("Poland", "POL", Some(Europe)),
    ("Portugal", "PRT", Some(Europe)),
    ("Puerto Rico", "PRI", Some(NorthAmerica)),
    ("Qatar", "QAT", Some(Asia)),
    ("Réunion", "REU", Some(Africa)),
    ("Romania", "ROU", Some(Europe)),
    ("Russian Federation", "RUS", Some(Europe)),
    ("Rwanda", "RWA", Some(Africa)),
    ("Saint Barthélemy", "BLM", Some(NorthAmerica)),
    ("Saint Helena, Ascension and Tristan da Cunha", "SHN", Some(Africa)),
    ("Saint Kitts and Nevis", "KNA", Some(NorthAmerica)),
    ("Saint Lucia", "LCA", Some(NorthAmerica)),
    ("Saint Martin (French part)", "MAF", Some(NorthAmerica)),
    ("Saint Pierre and Miquelon", "SPM", Some(NorthAmerica)),
    ("Saint Vincent and the Grenadines", "VCT", Some(NorthAmerica)),
    ("Samoa", "WSM", Some(Oceania)),
    ("San Marino", "SMR", Some(Europe)),
    ("Sao Tome and Principe", "STP", Some(Africa)),
    ("Saudi Arabia", "SAU", Some(Asia)),
    ("Senegal", "SEN", Some(Africa)),
    ("Serbia", "SRB", Some(Europe)),
    ("Seychelles", "SYC", Some(Africa)),
    ("Sierra Leone", "SLE", Some(Africa)),
    ("Singapore", "SGP", Some(Asia)),
    ("Sint Maarten (Dutch part)", "SXM", Some(NorthAmerica)),
    ("Slovakia", "SVK", Some(Europe)),
    ("Slovenia", "SVN", Some(Europe)),
    ("Solomon Islands", "SLB", Some(Oceania)),
    ("Somalia", "SOM", Some(Africa)),
    ("South Africa", "ZAF", Some(Africa)),
    ("South Georgia and the South Sandwich Islands", "SGS", None),
    ("South Sudan", "SSD", Some(Africa)),
    ("Spain", "ESP", Some(Europe)),
    ("Sri Lanka", "LKA", Some(Asia)),
    ("Sudan", "SDN", Some(Africa)),
    ("Suriname", "SUR", Some(SouthAmerica)),
    ("Svalbard and Jan Mayen", "SJM", Some(Europe)),
    ("Sweden", "SWE", Some(Europe)),
    ("Switzerland", "CHE", Some(Europe)),
    ("Syrian Arab Republic", "SYR", Some(Asia)),
    ("Taiwan, Province of China", "TWN", Some(Asia)),
    ("Tajikistan", "TJK", Some(Asia)),
    ("Tanzania, United Republic of", "TZA", Some(Africa)),
    ("Thailand", "THA", Some(Asia)),
    ("Timor-Leste", "TLS", Some(Asia)),
    ("Togo", "TGO", Some(Africa)),
    ("Tokelau", "TKL", Some(Oceania)),
    ("Tonga", "TON", Some(Oceania)),
    ("Trinidad and Tobago", "TTO", Some(NorthAmerica)),
    ("Tunisia", "TUN", Some(Africa)),
    ("Turkey", "TUR", Some(Asia)),
    ("Turkmenistan", "TKM", Some(Asia)),
    ("Turks and Caicos Islands", "TCA", Some(NorthAmerica)),
    ("Tuvalu", "TUV", Some(Oceania)),
    ("Uganda", "UGA", Some(Africa)),
    ("Ukraine", "UKR", Some(Europe)),
    ("United Arab Emirates", "ARE", Some(Asia)),
    ("United Kingdom of Great Britain and Northern Ireland", "GBR", Some(Europe)),
    ("United States of America", "USA", Some(NorthAmerica)),
    ("United States Minor Outlying Islands", "UMI", None),
    ("Uruguay", "URY", Some(SouthAmerica)),
    ("Uzbekistan", "UZB", Some(Asia)),
    ("Vanuatu", "VUT", Some(Oceania)),
    ("Venezuela, Bolivarian Republic of", "VEN", Some(SouthAmerica)),
    ("Viet Nam", "VNM", Some(Asia)),
    ("Virgin Islands, British", "VGB", Some(NorthAmerica)),
    ("Virgin Islands, U.S.", "VIR", Some(NorthAmerica)),
    ("Wallis and Futuna", "WLF", Some(Oceania)),
    ("Western Sahara", "ESH", Some(Africa)),
    ("Yemen", "YEM", Some(Asia)),
    ("Zambia", "ZMB", Some(Africa)),
    ("Zimbabwe", "ZWE", Some(Africa)),
];

/// Free-text spellings seen in the portal export that are not ISO short names.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("United States", "USA"),
    ("USA", "USA"),
    ("United Kingdom", "GBR"),
    ("UK", "GBR"),
    ("Russia", "RUS"),
    ("Iran", "IRN"),
    ("Vietnam", "VNM"),
    ("South Korea", "KOR"),
    ("North Korea", "PRK"),
    ("Laos", "LAO"),
    ("Syria", "SYR"),
    ("Tanzania", "TZA"),
    ("Bolivia", "BOL"),
    ("Venezuela", "VEN"),
    ("Moldova", "MDA"),
    ("Taiwan", "TWN"),
    ("Czech Republic", "CZE"),
    ("Macedonia", "MKD"),
    ("Swaziland", "SWZ"),
    ("Cape Verde", "CPV"),
    ("Ivory Coast", "CIV"),
    ("Democratic Republic of the Congo", "COD"),
    ("Republic of the Congo", "COG"),
];
