// ISO 3166-1 alpha-2 assignments, sorted by code.
//
// Phone prefixes omit the leading `+`. Members of the North American Numbering Plan other
// than the United States, Canada and the US Minor Outlying Islands carry their area code
// (`1-242`). Uninhabited territories have an empty capital.

use crate::continent::{
    AFRICA, ANTARCTICA, ASIA, EUROPE, NORTH_AMERICA, OCEANIA, SOUTH_AMERICA,
};
use geodex_domain::{Country, Currency};

macro_rules! country {
    (
        $code:literal, $alpha3:literal, $label:literal, $phone:literal, $capital:literal,
        $continent:ident, [$cur_code:literal, $cur_symbol:literal, $cur_name:literal],
        [$($tz:literal),* $(,)?] $(,)?
    ) => {
        Country {
            code: $code,
            alpha3: $alpha3,
            label: $label,
            phone: $phone,
            capital: $capital,
            continent: $continent,
            currency: Currency { code: $cur_code, symbol: $cur_symbol, name: $cur_name },
            timezones: &[$($tz),*],
        }
    };
}

pub(crate) static COUNTRIES: &[Country] = &[
    country!("AD", "AND", "Andorra", "376", "Andorra la Vella", EUROPE, ["EUR", "€", "Euro"], ["Europe/Andorra"]),
    country!("AE", "ARE", "United Arab Emirates", "971", "Abu Dhabi", ASIA, ["AED", "د.إ", "UAE dirham"], ["Asia/Dubai"]),
    country!("AF", "AFG", "Afghanistan", "93", "Kabul", ASIA, ["AFN", "؋", "Afghan afghani"], ["Asia/Kabul"]),
    country!("AG", "ATG", "Antigua and Barbuda", "1-268", "Saint John's", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/Antigua"]),
    country!("AI", "AIA", "Anguilla", "1-264", "The Valley", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/Anguilla"]),
    country!("AL", "ALB", "Albania", "355", "Tirana", EUROPE, ["ALL", "L", "Albanian lek"], ["Europe/Tirane"]),
    country!("AM", "ARM", "Armenia", "374", "Yerevan", ASIA, ["AMD", "֏", "Armenian dram"], ["Asia/Yerevan"]),
    country!("AO", "AGO", "Angola", "244", "Luanda", AFRICA, ["AOA", "Kz", "Angolan kwanza"], ["Africa/Luanda"]),
    country!("AQ", "ATA", "Antarctica", "672", "", ANTARCTICA, ["USD", "$", "United States dollar"], [
        "Antarctica/McMurdo", "Antarctica/Casey", "Antarctica/Davis", "Antarctica/DumontDUrville",
        "Antarctica/Mawson", "Antarctica/Palmer", "Antarctica/Rothera", "Antarctica/Syowa",
        "Antarctica/Troll", "Antarctica/Vostok",
    ]),
    country!("AR", "ARG", "Argentina", "54", "Buenos Aires", SOUTH_AMERICA, ["ARS", "$", "Argentine peso"], [
        "America/Argentina/Buenos_Aires", "America/Argentina/Cordoba", "America/Argentina/Salta",
        "America/Argentina/Jujuy", "America/Argentina/Tucuman", "America/Argentina/Catamarca",
        "America/Argentina/La_Rioja", "America/Argentina/San_Juan", "America/Argentina/Mendoza",
        "America/Argentina/San_Luis", "America/Argentina/Rio_Gallegos", "America/Argentina/Ushuaia",
    ]),
    country!("AS", "ASM", "American Samoa", "1-684", "Pago Pago", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Pago_Pago"]),
    country!("AT", "AUT", "Austria", "43", "Vienna", EUROPE, ["EUR", "€", "Euro"], ["Europe/Vienna"]),
    country!("AU", "AUS", "Australia", "61", "Canberra", OCEANIA, ["AUD", "$", "Australian dollar"], [
        "Australia/Sydney", "Australia/Melbourne", "Australia/Brisbane", "Australia/Adelaide",
        "Australia/Perth", "Australia/Darwin", "Australia/Hobart", "Australia/Lord_Howe",
        "Australia/Broken_Hill", "Australia/Lindeman", "Australia/Eucla", "Antarctica/Macquarie",
    ]),
    country!("AW", "ABW", "Aruba", "297", "Oranjestad", NORTH_AMERICA, ["AWG", "ƒ", "Aruban florin"], ["America/Aruba"]),
    country!("AX", "ALA", "Åland Islands", "358", "Mariehamn", EUROPE, ["EUR", "€", "Euro"], ["Europe/Mariehamn"]),
    country!("AZ", "AZE", "Azerbaijan", "994", "Baku", ASIA, ["AZN", "₼", "Azerbaijani manat"], ["Asia/Baku"]),
    country!("BA", "BIH", "Bosnia and Herzegovina", "387", "Sarajevo", EUROPE, ["BAM", "KM", "Bosnia and Herzegovina convertible mark"], ["Europe/Sarajevo"]),
    country!("BB", "BRB", "Barbados", "1-246", "Bridgetown", NORTH_AMERICA, ["BBD", "$", "Barbadian dollar"], ["America/Barbados"]),
    country!("BD", "BGD", "Bangladesh", "880", "Dhaka", ASIA, ["BDT", "৳", "Bangladeshi taka"], ["Asia/Dhaka"]),
    country!("BE", "BEL", "Belgium", "32", "Brussels", EUROPE, ["EUR", "€", "Euro"], ["Europe/Brussels"]),
    country!("BF", "BFA", "Burkina Faso", "226", "Ouagadougou", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Ouagadougou"]),
    country!("BG", "BGR", "Bulgaria", "359", "Sofia", EUROPE, ["BGN", "лв", "Bulgarian lev"], ["Europe/Sofia"]),
    country!("BH", "BHR", "Bahrain", "973", "Manama", ASIA, ["BHD", ".د.ب", "Bahraini dinar"], ["Asia/Bahrain"]),
    country!("BI", "BDI", "Burundi", "257", "Gitega", AFRICA, ["BIF", "Fr", "Burundian franc"], ["Africa/Bujumbura"]),
    country!("BJ", "BEN", "Benin", "229", "Porto-Novo", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Porto-Novo"]),
    country!("BL", "BLM", "Saint Barthélemy", "590", "Gustavia", NORTH_AMERICA, ["EUR", "€", "Euro"], ["America/St_Barthelemy"]),
    country!("BM", "BMU", "Bermuda", "1-441", "Hamilton", NORTH_AMERICA, ["BMD", "$", "Bermudian dollar"], ["Atlantic/Bermuda"]),
    country!("BN", "BRN", "Brunei Darussalam", "673", "Bandar Seri Begawan", ASIA, ["BND", "$", "Brunei dollar"], ["Asia/Brunei"]),
    country!("BO", "BOL", "Bolivia", "591", "Sucre", SOUTH_AMERICA, ["BOB", "Bs.", "Bolivian boliviano"], ["America/La_Paz"]),
    country!("BQ", "BES", "Bonaire, Sint Eustatius and Saba", "599", "Kralendijk", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/Kralendijk"]),
    country!("BR", "BRA", "Brazil", "55", "Brasília", SOUTH_AMERICA, ["BRL", "R$", "Brazilian real"], [
        "America/Sao_Paulo", "America/Noronha", "America/Belem", "America/Fortaleza",
        "America/Recife", "America/Araguaina", "America/Maceio", "America/Bahia",
        "America/Campo_Grande", "America/Cuiaba", "America/Santarem", "America/Porto_Velho",
        "America/Boa_Vista", "America/Manaus", "America/Eirunepe", "America/Rio_Branco",
    ]),
    country!("BS", "BHS", "Bahamas", "1-242", "Nassau", NORTH_AMERICA, ["BSD", "$", "Bahamian dollar"], ["America/Nassau"]),
    country!("BT", "BTN", "Bhutan", "975", "Thimphu", ASIA, ["BTN", "Nu.", "Bhutanese ngultrum"], ["Asia/Thimphu"]),
    country!("BV", "BVT", "Bouvet Island", "47", "", ANTARCTICA, ["NOK", "kr", "Norwegian krone"], ["Europe/Oslo"]),
    country!("BW", "BWA", "Botswana", "267", "Gaborone", AFRICA, ["BWP", "P", "Botswana pula"], ["Africa/Gaborone"]),
    country!("BY", "BLR", "Belarus", "375", "Minsk", EUROPE, ["BYN", "Br", "Belarusian ruble"], ["Europe/Minsk"]),
    country!("BZ", "BLZ", "Belize", "501", "Belmopan", NORTH_AMERICA, ["BZD", "$", "Belize dollar"], ["America/Belize"]),
    country!("CA", "CAN", "Canada", "1", "Ottawa", NORTH_AMERICA, ["CAD", "$", "Canadian dollar"], [
        "America/Toronto", "America/St_Johns", "America/Halifax", "America/Glace_Bay",
        "America/Moncton", "America/Goose_Bay", "America/Iqaluit", "America/Winnipeg",
        "America/Rankin_Inlet", "America/Resolute", "America/Regina", "America/Swift_Current",
        "America/Edmonton", "America/Cambridge_Bay", "America/Inuvik", "America/Vancouver",
        "America/Whitehorse", "America/Dawson", "America/Dawson_Creek", "America/Fort_Nelson",
        "America/Creston", "America/Atikokan", "America/Blanc-Sablon",
    ]),
    country!("CC", "CCK", "Cocos (Keeling) Islands", "61", "West Island", ASIA, ["AUD", "$", "Australian dollar"], ["Indian/Cocos"]),
    country!("CD", "COD", "Congo, Democratic Republic of the", "243", "Kinshasa", AFRICA, ["CDF", "Fr", "Congolese franc"], ["Africa/Kinshasa", "Africa/Lubumbashi"]),
    country!("CF", "CAF", "Central African Republic", "236", "Bangui", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Bangui"]),
    country!("CG", "COG", "Congo", "242", "Brazzaville", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Brazzaville"]),
    country!("CH", "CHE", "Switzerland", "41", "Bern", EUROPE, ["CHF", "Fr.", "Swiss franc"], ["Europe/Zurich"]),
    country!("CI", "CIV", "Côte d'Ivoire", "225", "Yamoussoukro", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Abidjan"]),
    country!("CK", "COK", "Cook Islands", "682", "Avarua", OCEANIA, ["NZD", "$", "New Zealand dollar"], ["Pacific/Rarotonga"]),
    country!("CL", "CHL", "Chile", "56", "Santiago", SOUTH_AMERICA, ["CLP", "$", "Chilean peso"], ["America/Santiago", "America/Punta_Arenas", "Pacific/Easter"]),
    country!("CM", "CMR", "Cameroon", "237", "Yaoundé", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Douala"]),
    country!("CN", "CHN", "China", "86", "Beijing", ASIA, ["CNY", "¥", "Chinese yuan"], ["Asia/Shanghai", "Asia/Urumqi"]),
    country!("CO", "COL", "Colombia", "57", "Bogotá", SOUTH_AMERICA, ["COP", "$", "Colombian peso"], ["America/Bogota"]),
    country!("CR", "CRI", "Costa Rica", "506", "San José", NORTH_AMERICA, ["CRC", "₡", "Costa Rican colón"], ["America/Costa_Rica"]),
    country!("CU", "CUB", "Cuba", "53", "Havana", NORTH_AMERICA, ["CUP", "$", "Cuban peso"], ["America/Havana"]),
    country!("CV", "CPV", "Cabo Verde", "238", "Praia", AFRICA, ["CVE", "$", "Cape Verdean escudo"], ["Atlantic/Cape_Verde"]),
    country!("CW", "CUW", "Curaçao", "599", "Willemstad", NORTH_AMERICA, ["ANG", "ƒ", "Netherlands Antillean guilder"], ["America/Curacao"]),
    country!("CX", "CXR", "Christmas Island", "61", "Flying Fish Cove", ASIA, ["AUD", "$", "Australian dollar"], ["Indian/Christmas"]),
    country!("CY", "CYP", "Cyprus", "357", "Nicosia", EUROPE, ["EUR", "€", "Euro"], ["Asia/Nicosia", "Asia/Famagusta"]),
    country!("CZ", "CZE", "Czechia", "420", "Prague", EUROPE, ["CZK", "Kč", "Czech koruna"], ["Europe/Prague"]),
    country!("DE", "DEU", "Germany", "49", "Berlin", EUROPE, ["EUR", "€", "Euro"], ["Europe/Berlin", "Europe/Busingen"]),
    country!("DJ", "DJI", "Djibouti", "253", "Djibouti", AFRICA, ["DJF", "Fr", "Djiboutian franc"], ["Africa/Djibouti"]),
    country!("DK", "DNK", "Denmark", "45", "Copenhagen", EUROPE, ["DKK", "kr", "Danish krone"], ["Europe/Copenhagen"]),
    country!("DM", "DMA", "Dominica", "1-767", "Roseau", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/Dominica"]),
    country!("DO", "DOM", "Dominican Republic", "1-809", "Santo Domingo", NORTH_AMERICA, ["DOP", "$", "Dominican peso"], ["America/Santo_Domingo"]),
    country!("DZ", "DZA", "Algeria", "213", "Algiers", AFRICA, ["DZD", "د.ج", "Algerian dinar"], ["Africa/Algiers"]),
    country!("EC", "ECU", "Ecuador", "593", "Quito", SOUTH_AMERICA, ["USD", "$", "United States dollar"], ["America/Guayaquil", "Pacific/Galapagos"]),
    country!("EE", "EST", "Estonia", "372", "Tallinn", EUROPE, ["EUR", "€", "Euro"], ["Europe/Tallinn"]),
    country!("EG", "EGY", "Egypt", "20", "Cairo", AFRICA, ["EGP", "£", "Egyptian pound"], ["Africa/Cairo"]),
    country!("EH", "ESH", "Western Sahara", "212", "Laayoune", AFRICA, ["MAD", "د.م.", "Moroccan dirham"], ["Africa/El_Aaiun"]),
    country!("ER", "ERI", "Eritrea", "291", "Asmara", AFRICA, ["ERN", "Nfk", "Eritrean nakfa"], ["Africa/Asmara"]),
    country!("ES", "ESP", "Spain", "34", "Madrid", EUROPE, ["EUR", "€", "Euro"], ["Europe/Madrid", "Africa/Ceuta", "Atlantic/Canary"]),
    country!("ET", "ETH", "Ethiopia", "251", "Addis Ababa", AFRICA, ["ETB", "Br", "Ethiopian birr"], ["Africa/Addis_Ababa"]),
    country!("FI", "FIN", "Finland", "358", "Helsinki", EUROPE, ["EUR", "€", "Euro"], ["Europe/Helsinki"]),
    country!("FJ", "FJI", "Fiji", "679", "Suva", OCEANIA, ["FJD", "$", "Fijian dollar"], ["Pacific/Fiji"]),
    country!("FK", "FLK", "Falkland Islands (Malvinas)", "500", "Stanley", SOUTH_AMERICA, ["FKP", "£", "Falkland Islands pound"], ["Atlantic/Stanley"]),
    country!("FM", "FSM", "Micronesia, Federated States of", "691", "Palikir", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Chuuk", "Pacific/Pohnpei", "Pacific/Kosrae"]),
    country!("FO", "FRO", "Faroe Islands", "298", "Tórshavn", EUROPE, ["DKK", "kr", "Danish krone"], ["Atlantic/Faroe"]),
    country!("FR", "FRA", "France", "33", "Paris", EUROPE, ["EUR", "€", "Euro"], ["Europe/Paris"]),
    country!("GA", "GAB", "Gabon", "241", "Libreville", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Libreville"]),
    country!("GB", "GBR", "United Kingdom", "44", "London", EUROPE, ["GBP", "£", "Pound sterling"], ["Europe/London"]),
    country!("GD", "GRD", "Grenada", "1-473", "Saint George's", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/Grenada"]),
    country!("GE", "GEO", "Georgia", "995", "Tbilisi", ASIA, ["GEL", "₾", "Georgian lari"], ["Asia/Tbilisi"]),
    country!("GF", "GUF", "French Guiana", "594", "Cayenne", SOUTH_AMERICA, ["EUR", "€", "Euro"], ["America/Cayenne"]),
    country!("GG", "GGY", "Guernsey", "44", "Saint Peter Port", EUROPE, ["GBP", "£", "Pound sterling"], ["Europe/Guernsey"]),
    country!("GH", "GHA", "Ghana", "233", "Accra", AFRICA, ["GHS", "₵", "Ghanaian cedi"], ["Africa/Accra"]),
    country!("GI", "GIB", "Gibraltar", "350", "Gibraltar", EUROPE, ["GIP", "£", "Gibraltar pound"], ["Europe/Gibraltar"]),
    country!("GL", "GRL", "Greenland", "299", "Nuuk", NORTH_AMERICA, ["DKK", "kr", "Danish krone"], [
        "America/Nuuk", "America/Danmarkshavn", "America/Scoresbysund", "America/Thule",
    ]),
    country!("GM", "GMB", "Gambia", "220", "Banjul", AFRICA, ["GMD", "D", "Gambian dalasi"], ["Africa/Banjul"]),
    country!("GN", "GIN", "Guinea", "224", "Conakry", AFRICA, ["GNF", "Fr", "Guinean franc"], ["Africa/Conakry"]),
    country!("GP", "GLP", "Guadeloupe", "590", "Basse-Terre", NORTH_AMERICA, ["EUR", "€", "Euro"], ["America/Guadeloupe"]),
    country!("GQ", "GNQ", "Equatorial Guinea", "240", "Malabo", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Malabo"]),
    country!("GR", "GRC", "Greece", "30", "Athens", EUROPE, ["EUR", "€", "Euro"], ["Europe/Athens"]),
    country!("GS", "SGS", "South Georgia and the South Sandwich Islands", "500", "King Edward Point", ANTARCTICA, ["GBP", "£", "Pound sterling"], ["Atlantic/South_Georgia"]),
    country!("GT", "GTM", "Guatemala", "502", "Guatemala City", NORTH_AMERICA, ["GTQ", "Q", "Guatemalan quetzal"], ["America/Guatemala"]),
    country!("GU", "GUM", "Guam", "1-671", "Hagåtña", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Guam"]),
    country!("GW", "GNB", "Guinea-Bissau", "245", "Bissau", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Bissau"]),
    country!("GY", "GUY", "Guyana", "592", "Georgetown", SOUTH_AMERICA, ["GYD", "$", "Guyanese dollar"], ["America/Guyana"]),
    country!("HK", "HKG", "Hong Kong", "852", "Hong Kong", ASIA, ["HKD", "$", "Hong Kong dollar"], ["Asia/Hong_Kong"]),
    country!("HM", "HMD", "Heard Island and McDonald Islands", "672", "", ANTARCTICA, ["AUD", "$", "Australian dollar"], ["Indian/Kerguelen"]),
    country!("HN", "HND", "Honduras", "504", "Tegucigalpa", NORTH_AMERICA, ["HNL", "L", "Honduran lempira"], ["America/Tegucigalpa"]),
    country!("HR", "HRV", "Croatia", "385", "Zagreb", EUROPE, ["EUR", "€", "Euro"], ["Europe/Zagreb"]),
    country!("HT", "HTI", "Haiti", "509", "Port-au-Prince", NORTH_AMERICA, ["HTG", "G", "Haitian gourde"], ["America/Port-au-Prince"]),
    country!("HU", "HUN", "Hungary", "36", "Budapest", EUROPE, ["HUF", "Ft", "Hungarian forint"], ["Europe/Budapest"]),
    country!("ID", "IDN", "Indonesia", "62", "Jakarta", ASIA, ["IDR", "Rp", "Indonesian rupiah"], [
        "Asia/Jakarta", "Asia/Pontianak", "Asia/Makassar", "Asia/Jayapura",
    ]),
    country!("IE", "IRL", "Ireland", "353", "Dublin", EUROPE, ["EUR", "€", "Euro"], ["Europe/Dublin"]),
    country!("IL", "ISR", "Israel", "972", "Jerusalem", ASIA, ["ILS", "₪", "Israeli new shekel"], ["Asia/Jerusalem"]),
    country!("IM", "IMN", "Isle of Man", "44", "Douglas", EUROPE, ["GBP", "£", "Pound sterling"], ["Europe/Isle_of_Man"]),
    country!("IN", "IND", "India", "91", "New Delhi", ASIA, ["INR", "₹", "Indian rupee"], ["Asia/Kolkata"]),
    country!("IO", "IOT", "British Indian Ocean Territory", "246", "Diego Garcia", ASIA, ["USD", "$", "United States dollar"], ["Indian/Chagos"]),
    country!("IQ", "IRQ", "Iraq", "964", "Baghdad", ASIA, ["IQD", "ع.د", "Iraqi dinar"], ["Asia/Baghdad"]),
    country!("IR", "IRN", "Iran", "98", "Tehran", ASIA, ["IRR", "﷼", "Iranian rial"], ["Asia/Tehran"]),
    country!("IS", "ISL", "Iceland", "354", "Reykjavík", EUROPE, ["ISK", "kr", "Icelandic króna"], ["Atlantic/Reykjavik"]),
    country!("IT", "ITA", "Italy", "39", "Rome", EUROPE, ["EUR", "€", "Euro"], ["Europe/Rome"]),
    country!("JE", "JEY", "Jersey", "44", "Saint Helier", EUROPE, ["GBP", "£", "Pound sterling"], ["Europe/Jersey"]),
    country!("JM", "JAM", "Jamaica", "1-876", "Kingston", NORTH_AMERICA, ["JMD", "$", "Jamaican dollar"], ["America/Jamaica"]),
    country!("JO", "JOR", "Jordan", "962", "Amman", ASIA, ["JOD", "د.ا", "Jordanian dinar"], ["Asia/Amman"]),
    country!("JP", "JPN", "Japan", "81", "Tokyo", ASIA, ["JPY", "¥", "Japanese yen"], ["Asia/Tokyo"]),
    country!("KE", "KEN", "Kenya", "254", "Nairobi", AFRICA, ["KES", "Sh", "Kenyan shilling"], ["Africa/Nairobi"]),
    country!("KG", "KGZ", "Kyrgyzstan", "996", "Bishkek", ASIA, ["KGS", "с", "Kyrgyzstani som"], ["Asia/Bishkek"]),
    country!("KH", "KHM", "Cambodia", "855", "Phnom Penh", ASIA, ["KHR", "៛", "Cambodian riel"], ["Asia/Phnom_Penh"]),
    country!("KI", "KIR", "Kiribati", "686", "South Tarawa", OCEANIA, ["AUD", "$", "Australian dollar"], [
        "Pacific/Tarawa", "Pacific/Kanton", "Pacific/Kiritimati",
    ]),
    country!("KM", "COM", "Comoros", "269", "Moroni", AFRICA, ["KMF", "Fr", "Comorian franc"], ["Indian/Comoro"]),
    country!("KN", "KNA", "Saint Kitts and Nevis", "1-869", "Basseterre", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/St_Kitts"]),
    country!("KP", "PRK", "Korea, Democratic People's Republic of", "850", "Pyongyang", ASIA, ["KPW", "₩", "North Korean won"], ["Asia/Pyongyang"]),
    country!("KR", "KOR", "Korea, Republic of", "82", "Seoul", ASIA, ["KRW", "₩", "South Korean won"], ["Asia/Seoul"]),
    country!("KW", "KWT", "Kuwait", "965", "Kuwait City", ASIA, ["KWD", "د.ك", "Kuwaiti dinar"], ["Asia/Kuwait"]),
    country!("KY", "CYM", "Cayman Islands", "1-345", "George Town", NORTH_AMERICA, ["KYD", "$", "Cayman Islands dollar"], ["America/Cayman"]),
    country!("KZ", "KAZ", "Kazakhstan", "7", "Astana", ASIA, ["KZT", "₸", "Kazakhstani tenge"], [
        "Asia/Almaty", "Asia/Qyzylorda", "Asia/Qostanay", "Asia/Aqtobe", "Asia/Aqtau",
        "Asia/Atyrau", "Asia/Oral",
    ]),
    country!("LA", "LAO", "Lao People's Democratic Republic", "856", "Vientiane", ASIA, ["LAK", "₭", "Lao kip"], ["Asia/Vientiane"]),
    country!("LB", "LBN", "Lebanon", "961", "Beirut", ASIA, ["LBP", "ل.ل", "Lebanese pound"], ["Asia/Beirut"]),
    country!("LC", "LCA", "Saint Lucia", "1-758", "Castries", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/St_Lucia"]),
    country!("LI", "LIE", "Liechtenstein", "423", "Vaduz", EUROPE, ["CHF", "Fr.", "Swiss franc"], ["Europe/Vaduz"]),
    country!("LK", "LKA", "Sri Lanka", "94", "Sri Jayawardenepura Kotte", ASIA, ["LKR", "Rs", "Sri Lankan rupee"], ["Asia/Colombo"]),
    country!("LR", "LBR", "Liberia", "231", "Monrovia", AFRICA, ["LRD", "$", "Liberian dollar"], ["Africa/Monrovia"]),
    country!("LS", "LSO", "Lesotho", "266", "Maseru", AFRICA, ["LSL", "L", "Lesotho loti"], ["Africa/Maseru"]),
    country!("LT", "LTU", "Lithuania", "370", "Vilnius", EUROPE, ["EUR", "€", "Euro"], ["Europe/Vilnius"]),
    country!("LU", "LUX", "Luxembourg", "352", "Luxembourg", EUROPE, ["EUR", "€", "Euro"], ["Europe/Luxembourg"]),
    country!("LV", "LVA", "Latvia", "371", "Riga", EUROPE, ["EUR", "€", "Euro"], ["Europe/Riga"]),
    country!("LY", "LBY", "Libya", "218", "Tripoli", AFRICA, ["LYD", "ل.د", "Libyan dinar"], ["Africa/Tripoli"]),
    country!("MA", "MAR", "Morocco", "212", "Rabat", AFRICA, ["MAD", "د.م.", "Moroccan dirham"], ["Africa/Casablanca"]),
    country!("MC", "MCO", "Monaco", "377", "Monaco", EUROPE, ["EUR", "€", "Euro"], ["Europe/Monaco"]),
    country!("MD", "MDA", "Moldova", "373", "Chișinău", EUROPE, ["MDL", "L", "Moldovan leu"], ["Europe/Chisinau"]),
    country!("ME", "MNE", "Montenegro", "382", "Podgorica", EUROPE, ["EUR", "€", "Euro"], ["Europe/Podgorica"]),
    country!("MF", "MAF", "Saint Martin (French part)", "590", "Marigot", NORTH_AMERICA, ["EUR", "€", "Euro"], ["America/Marigot"]),
    country!("MG", "MDG", "Madagascar", "261", "Antananarivo", AFRICA, ["MGA", "Ar", "Malagasy ariary"], ["Indian/Antananarivo"]),
    country!("MH", "MHL", "Marshall Islands", "692", "Majuro", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Majuro", "Pacific/Kwajalein"]),
    country!("MK", "MKD", "North Macedonia", "389", "Skopje", EUROPE, ["MKD", "ден", "Macedonian denar"], ["Europe/Skopje"]),
    country!("ML", "MLI", "Mali", "223", "Bamako", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Bamako"]),
    country!("MM", "MMR", "Myanmar", "95", "Naypyidaw", ASIA, ["MMK", "K", "Burmese kyat"], ["Asia/Yangon"]),
    country!("MN", "MNG", "Mongolia", "976", "Ulaanbaatar", ASIA, ["MNT", "₮", "Mongolian tögrög"], ["Asia/Ulaanbaatar", "Asia/Hovd"]),
    country!("MO", "MAC", "Macao", "853", "Macao", ASIA, ["MOP", "P", "Macanese pataca"], ["Asia/Macau"]),
    country!("MP", "MNP", "Northern Mariana Islands", "1-670", "Saipan", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Saipan"]),
    country!("MQ", "MTQ", "Martinique", "596", "Fort-de-France", NORTH_AMERICA, ["EUR", "€", "Euro"], ["America/Martinique"]),
    country!("MR", "MRT", "Mauritania", "222", "Nouakchott", AFRICA, ["MRU", "UM", "Mauritanian ouguiya"], ["Africa/Nouakchott"]),
    country!("MS", "MSR", "Montserrat", "1-664", "Brades", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/Montserrat"]),
    country!("MT", "MLT", "Malta", "356", "Valletta", EUROPE, ["EUR", "€", "Euro"], ["Europe/Malta"]),
    country!("MU", "MUS", "Mauritius", "230", "Port Louis", AFRICA, ["MUR", "₨", "Mauritian rupee"], ["Indian/Mauritius"]),
    country!("MV", "MDV", "Maldives", "960", "Malé", ASIA, ["MVR", ".ރ", "Maldivian rufiyaa"], ["Indian/Maldives"]),
    country!("MW", "MWI", "Malawi", "265", "Lilongwe", AFRICA, ["MWK", "MK", "Malawian kwacha"], ["Africa/Blantyre"]),
    country!("MX", "MEX", "Mexico", "52", "Mexico City", NORTH_AMERICA, ["MXN", "$", "Mexican peso"], [
        "America/Mexico_City", "America/Cancun", "America/Merida", "America/Monterrey",
        "America/Matamoros", "America/Chihuahua", "America/Ciudad_Juarez", "America/Ojinaga",
        "America/Mazatlan", "America/Bahia_Banderas", "America/Hermosillo", "America/Tijuana",
    ]),
    country!("MY", "MYS", "Malaysia", "60", "Kuala Lumpur", ASIA, ["MYR", "RM", "Malaysian ringgit"], ["Asia/Kuala_Lumpur", "Asia/Kuching"]),
    country!("MZ", "MOZ", "Mozambique", "258", "Maputo", AFRICA, ["MZN", "MT", "Mozambican metical"], ["Africa/Maputo"]),
    country!("NA", "NAM", "Namibia", "264", "Windhoek", AFRICA, ["NAD", "$", "Namibian dollar"], ["Africa/Windhoek"]),
    country!("NC", "NCL", "New Caledonia", "687", "Nouméa", OCEANIA, ["XPF", "₣", "CFP franc"], ["Pacific/Noumea"]),
    country!("NE", "NER", "Niger", "227", "Niamey", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Niamey"]),
    country!("NF", "NFK", "Norfolk Island", "672", "Kingston", OCEANIA, ["AUD", "$", "Australian dollar"], ["Pacific/Norfolk"]),
    country!("NG", "NGA", "Nigeria", "234", "Abuja", AFRICA, ["NGN", "₦", "Nigerian naira"], ["Africa/Lagos"]),
    country!("NI", "NIC", "Nicaragua", "505", "Managua", NORTH_AMERICA, ["NIO", "C$", "Nicaraguan córdoba"], ["America/Managua"]),
    country!("NL", "NLD", "Netherlands", "31", "Amsterdam", EUROPE, ["EUR", "€", "Euro"], ["Europe/Amsterdam"]),
    country!("NO", "NOR", "Norway", "47", "Oslo", EUROPE, ["NOK", "kr", "Norwegian krone"], ["Europe/Oslo"]),
    country!("NP", "NPL", "Nepal", "977", "Kathmandu", ASIA, ["NPR", "₨", "Nepalese rupee"], ["Asia/Kathmandu"]),
    country!("NR", "NRU", "Nauru", "674", "Yaren", OCEANIA, ["AUD", "$", "Australian dollar"], ["Pacific/Nauru"]),
    country!("NU", "NIU", "Niue", "683", "Alofi", OCEANIA, ["NZD", "$", "New Zealand dollar"], ["Pacific/Niue"]),
    country!("NZ", "NZL", "New Zealand", "64", "Wellington", OCEANIA, ["NZD", "$", "New Zealand dollar"], ["Pacific/Auckland", "Pacific/Chatham"]),
    country!("OM", "OMN", "Oman", "968", "Muscat", ASIA, ["OMR", "ر.ع.", "Omani rial"], ["Asia/Muscat"]),
    country!("PA", "PAN", "Panama", "507", "Panama City", NORTH_AMERICA, ["PAB", "B/.", "Panamanian balboa"], ["America/Panama"]),
    country!("PE", "PER", "Peru", "51", "Lima", SOUTH_AMERICA, ["PEN", "S/", "Peruvian sol"], ["America/Lima"]),
    country!("PF", "PYF", "French Polynesia", "689", "Papeete", OCEANIA, ["XPF", "₣", "CFP franc"], ["Pacific/Tahiti", "Pacific/Marquesas", "Pacific/Gambier"]),
    country!("PG", "PNG", "Papua New Guinea", "675", "Port Moresby", OCEANIA, ["PGK", "K", "Papua New Guinean kina"], ["Pacific/Port_Moresby", "Pacific/Bougainville"]),
    country!("PH", "PHL", "Philippines", "63", "Manila", ASIA, ["PHP", "₱", "Philippine peso"], ["Asia/Manila"]),
    country!("PK", "PAK", "Pakistan", "92", "Islamabad", ASIA, ["PKR", "₨", "Pakistani rupee"], ["Asia/Karachi"]),
    country!("PL", "POL", "Poland", "48", "Warsaw", EUROPE, ["PLN", "zł", "Polish złoty"], ["Europe/Warsaw"]),
    country!("PM", "SPM", "Saint Pierre and Miquelon", "508", "Saint-Pierre", NORTH_AMERICA, ["EUR", "€", "Euro"], ["America/Miquelon"]),
    country!("PN", "PCN", "Pitcairn", "64", "Adamstown", OCEANIA, ["NZD", "$", "New Zealand dollar"], ["Pacific/Pitcairn"]),
    country!("PR", "PRI", "Puerto Rico", "1-787", "San Juan", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/Puerto_Rico"]),
    country!("PS", "PSE", "Palestine, State of", "970", "Ramallah", ASIA, ["ILS", "₪", "Israeli new shekel"], ["Asia/Gaza", "Asia/Hebron"]),
    country!("PT", "PRT", "Portugal", "351", "Lisbon", EUROPE, ["EUR", "€", "Euro"], ["Europe/Lisbon", "Atlantic/Madeira", "Atlantic/Azores"]),
    country!("PW", "PLW", "Palau", "680", "Ngerulmud", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Palau"]),
    country!("PY", "PRY", "Paraguay", "595", "Asunción", SOUTH_AMERICA, ["PYG", "₲", "Paraguayan guaraní"], ["America/Asuncion"]),
    country!("QA", "QAT", "Qatar", "974", "Doha", ASIA, ["QAR", "ر.ق", "Qatari riyal"], ["Asia/Qatar"]),
    country!("RE", "REU", "Réunion", "262", "Saint-Denis", AFRICA, ["EUR", "€", "Euro"], ["Indian/Reunion"]),
    country!("RO", "ROU", "Romania", "40", "Bucharest", EUROPE, ["RON", "lei", "Romanian leu"], ["Europe/Bucharest"]),
    country!("RS", "SRB", "Serbia", "381", "Belgrade", EUROPE, ["RSD", "дин.", "Serbian dinar"], ["Europe/Belgrade"]),
    country!("RU", "RUS", "Russian Federation", "7", "Moscow", EUROPE, ["RUB", "₽", "Russian ruble"], [
        "Europe/Moscow", "Europe/Kaliningrad", "Europe/Simferopol", "Europe/Kirov",
        "Europe/Volgograd", "Europe/Astrakhan", "Europe/Saratov", "Europe/Ulyanovsk",
        "Europe/Samara", "Asia/Yekaterinburg", "Asia/Omsk", "Asia/Novosibirsk", "Asia/Barnaul",
        "Asia/Tomsk", "Asia/Novokuznetsk", "Asia/Krasnoyarsk", "Asia/Irkutsk", "Asia/Chita",
        "Asia/Yakutsk", "Asia/Khandyga", "Asia/Vladivostok", "Asia/Ust-Nera", "Asia/Magadan",
        "Asia/Sakhalin", "Asia/Srednekolymsk", "Asia/Kamchatka", "Asia/Anadyr",
    ]),
    country!("RW", "RWA", "Rwanda", "250", "Kigali", AFRICA, ["RWF", "Fr", "Rwandan franc"], ["Africa/Kigali"]),
    country!("SA", "SAU", "Saudi Arabia", "966", "Riyadh", ASIA, ["SAR", "ر.س", "Saudi riyal"], ["Asia/Riyadh"]),
    country!("SB", "SLB", "Solomon Islands", "677", "Honiara", OCEANIA, ["SBD", "$", "Solomon Islands dollar"], ["Pacific/Guadalcanal"]),
    country!("SC", "SYC", "Seychelles", "248", "Victoria", AFRICA, ["SCR", "₨", "Seychellois rupee"], ["Indian/Mahe"]),
    country!("SD", "SDN", "Sudan", "249", "Khartoum", AFRICA, ["SDG", "ج.س.", "Sudanese pound"], ["Africa/Khartoum"]),
    country!("SE", "SWE", "Sweden", "46", "Stockholm", EUROPE, ["SEK", "kr", "Swedish krona"], ["Europe/Stockholm"]),
    country!("SG", "SGP", "Singapore", "65", "Singapore", ASIA, ["SGD", "$", "Singapore dollar"], ["Asia/Singapore"]),
    country!("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", "290", "Jamestown", AFRICA, ["SHP", "£", "Saint Helena pound"], ["Atlantic/St_Helena"]),
    country!("SI", "SVN", "Slovenia", "386", "Ljubljana", EUROPE, ["EUR", "€", "Euro"], ["Europe/Ljubljana"]),
    country!("SJ", "SJM", "Svalbard and Jan Mayen", "47", "Longyearbyen", EUROPE, ["NOK", "kr", "Norwegian krone"], ["Arctic/Longyearbyen"]),
    country!("SK", "SVK", "Slovakia", "421", "Bratislava", EUROPE, ["EUR", "€", "Euro"], ["Europe/Bratislava"]),
    country!("SL", "SLE", "Sierra Leone", "232", "Freetown", AFRICA, ["SLE", "Le", "Sierra Leonean leone"], ["Africa/Freetown"]),
    country!("SM", "SMR", "San Marino", "378", "San Marino", EUROPE, ["EUR", "€", "Euro"], ["Europe/San_Marino"]),
    country!("SN", "SEN", "Senegal", "221", "Dakar", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Dakar"]),
    country!("SO", "SOM", "Somalia", "252", "Mogadishu", AFRICA, ["SOS", "Sh", "Somali shilling"], ["Africa/Mogadishu"]),
    country!("SR", "SUR", "Suriname", "597", "Paramaribo", SOUTH_AMERICA, ["SRD", "$", "Surinamese dollar"], ["America/Paramaribo"]),
    country!("SS", "SSD", "South Sudan", "211", "Juba", AFRICA, ["SSP", "£", "South Sudanese pound"], ["Africa/Juba"]),
    country!("ST", "STP", "Sao Tome and Principe", "239", "São Tomé", AFRICA, ["STN", "Db", "São Tomé and Príncipe dobra"], ["Africa/Sao_Tome"]),
    country!("SV", "SLV", "El Salvador", "503", "San Salvador", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/El_Salvador"]),
    country!("SX", "SXM", "Sint Maarten (Dutch part)", "1-721", "Philipsburg", NORTH_AMERICA, ["ANG", "ƒ", "Netherlands Antillean guilder"], ["America/Lower_Princes"]),
    country!("SY", "SYR", "Syrian Arab Republic", "963", "Damascus", ASIA, ["SYP", "£", "Syrian pound"], ["Asia/Damascus"]),
    country!("SZ", "SWZ", "Eswatini", "268", "Mbabane", AFRICA, ["SZL", "L", "Swazi lilangeni"], ["Africa/Mbabane"]),
    country!("TC", "TCA", "Turks and Caicos Islands", "1-649", "Cockburn Town", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/Grand_Turk"]),
    country!("TD", "TCD", "Chad", "235", "N'Djamena", AFRICA, ["XAF", "Fr", "Central African CFA franc"], ["Africa/Ndjamena"]),
    country!("TF", "ATF", "French Southern Territories", "262", "Port-aux-Français", ANTARCTICA, ["EUR", "€", "Euro"], ["Indian/Kerguelen"]),
    country!("TG", "TGO", "Togo", "228", "Lomé", AFRICA, ["XOF", "Fr", "West African CFA franc"], ["Africa/Lome"]),
    country!("TH", "THA", "Thailand", "66", "Bangkok", ASIA, ["THB", "฿", "Thai baht"], ["Asia/Bangkok"]),
    country!("TJ", "TJK", "Tajikistan", "992", "Dushanbe", ASIA, ["TJS", "ЅМ", "Tajikistani somoni"], ["Asia/Dushanbe"]),
    country!("TK", "TKL", "Tokelau", "690", "Nukunonu", OCEANIA, ["NZD", "$", "New Zealand dollar"], ["Pacific/Fakaofo"]),
    country!("TL", "TLS", "Timor-Leste", "670", "Dili", ASIA, ["USD", "$", "United States dollar"], ["Asia/Dili"]),
    country!("TM", "TKM", "Turkmenistan", "993", "Ashgabat", ASIA, ["TMT", "m", "Turkmenistan manat"], ["Asia/Ashgabat"]),
    country!("TN", "TUN", "Tunisia", "216", "Tunis", AFRICA, ["TND", "د.ت", "Tunisian dinar"], ["Africa/Tunis"]),
    country!("TO", "TON", "Tonga", "676", "Nukuʻalofa", OCEANIA, ["TOP", "T$", "Tongan paʻanga"], ["Pacific/Tongatapu"]),
    country!("TR", "TUR", "Türkiye", "90", "Ankara", ASIA, ["TRY", "₺", "Turkish lira"], ["Europe/Istanbul"]),
    country!("TT", "TTO", "Trinidad and Tobago", "1-868", "Port of Spain", NORTH_AMERICA, ["TTD", "$", "Trinidad and Tobago dollar"], ["America/Port_of_Spain"]),
    country!("TV", "TUV", "Tuvalu", "688", "Funafuti", OCEANIA, ["AUD", "$", "Australian dollar"], ["Pacific/Funafuti"]),
    country!("TW", "TWN", "Taiwan", "886", "Taipei", ASIA, ["TWD", "$", "New Taiwan dollar"], ["Asia/Taipei"]),
    country!("TZ", "TZA", "Tanzania, United Republic of", "255", "Dodoma", AFRICA, ["TZS", "Sh", "Tanzanian shilling"], ["Africa/Dar_es_Salaam"]),
    country!("UA", "UKR", "Ukraine", "380", "Kyiv", EUROPE, ["UAH", "₴", "Ukrainian hryvnia"], ["Europe/Kyiv"]),
    country!("UG", "UGA", "Uganda", "256", "Kampala", AFRICA, ["UGX", "Sh", "Ugandan shilling"], ["Africa/Kampala"]),
    country!("UM", "UMI", "United States Minor Outlying Islands", "1", "", OCEANIA, ["USD", "$", "United States dollar"], ["Pacific/Midway", "Pacific/Wake"]),
    country!("US", "USA", "United States", "1", "Washington, D.C.", NORTH_AMERICA, ["USD", "$", "United States dollar"], [
        "America/New_York", "America/Detroit", "America/Kentucky/Louisville",
        "America/Kentucky/Monticello", "America/Indiana/Indianapolis", "America/Indiana/Vincennes",
        "America/Indiana/Winamac", "America/Indiana/Marengo", "America/Indiana/Petersburg",
        "America/Indiana/Vevay", "America/Chicago", "America/Indiana/Tell_City",
        "America/Indiana/Knox", "America/Menominee", "America/North_Dakota/Center",
        "America/North_Dakota/New_Salem", "America/North_Dakota/Beulah", "America/Denver",
        "America/Boise", "America/Phoenix", "America/Los_Angeles", "America/Anchorage",
        "America/Juneau", "America/Sitka", "America/Metlakatla", "America/Yakutat",
        "America/Nome", "America/Adak", "Pacific/Honolulu",
    ]),
    country!("UY", "URY", "Uruguay", "598", "Montevideo", SOUTH_AMERICA, ["UYU", "$", "Uruguayan peso"], ["America/Montevideo"]),
    country!("UZ", "UZB", "Uzbekistan", "998", "Tashkent", ASIA, ["UZS", "so'm", "Uzbekistani soʻm"], ["Asia/Samarkand", "Asia/Tashkent"]),
    country!("VA", "VAT", "Holy See (Vatican City State)", "39", "Vatican City", EUROPE, ["EUR", "€", "Euro"], ["Europe/Vatican"]),
    country!("VC", "VCT", "Saint Vincent and the Grenadines", "1-784", "Kingstown", NORTH_AMERICA, ["XCD", "$", "East Caribbean dollar"], ["America/St_Vincent"]),
    country!("VE", "VEN", "Venezuela", "58", "Caracas", SOUTH_AMERICA, ["VES", "Bs.S", "Venezuelan bolívar soberano"], ["America/Caracas"]),
    country!("VG", "VGB", "Virgin Islands, British", "1-284", "Road Town", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/Tortola"]),
    country!("VI", "VIR", "Virgin Islands, U.S.", "1-340", "Charlotte Amalie", NORTH_AMERICA, ["USD", "$", "United States dollar"], ["America/St_Thomas"]),
    country!("VN", "VNM", "Viet Nam", "84", "Hanoi", ASIA, ["VND", "₫", "Vietnamese đồng"], ["Asia/Ho_Chi_Minh"]),
    country!("VU", "VUT", "Vanuatu", "678", "Port Vila", OCEANIA, ["VUV", "Vt", "Vanuatu vatu"], ["Pacific/Efate"]),
    country!("WF", "WLF", "Wallis and Futuna", "681", "Mata-Utu", OCEANIA, ["XPF", "₣", "CFP franc"], ["Pacific/Wallis"]),
    country!("WS", "WSM", "Samoa", "685", "Apia", OCEANIA, ["WST", "T", "Samoan tālā"], ["Pacific/Apia"]),
    country!("YE", "YEM", "Yemen", "967", "Sana'a", ASIA, ["YER", "﷼", "Yemeni rial"], ["Asia/Aden"]),
    country!("YT", "MYT", "Mayotte", "262", "Mamoudzou", AFRICA, ["EUR", "€", "Euro"], ["Indian/Mayotte"]),
    country!("ZA", "ZAF", "South Africa", "27", "Pretoria", AFRICA, ["ZAR", "R", "South African rand"], ["Africa/Johannesburg"]),
    country!("ZM", "ZMB", "Zambia", "260", "Lusaka", AFRICA, ["ZMW", "ZK", "Zambian kwacha"], ["Africa/Lusaka"]),
    country!("ZW", "ZWE", "Zimbabwe", "263", "Harare", AFRICA, ["ZWG", "ZiG", "Zimbabwe Gold"], ["Africa/Harare"]),
];
