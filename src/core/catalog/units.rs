//! Unit listings per category, in selector display order.
//!
//! Codes are the canonical identifiers the engine converts between. Aliases
//! cover the spellings older clients persisted (`c`, `fl_oz`, `kph`, ...).

use super::Unit;

const fn unit(
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    description: &'static str,
    aliases: &'static [&'static str],
) -> Unit {
    Unit {
        code,
        name,
        symbol,
        description: if description.is_empty() { None } else { Some(description) },
        aliases,
    }
}

pub(super) const LENGTH: &[Unit] = &[
    unit("mm", "Millimeter", "mm", "One thousandth of a meter", &["millimeter", "millimeters", "millimetre", "millimetres"]),
    unit("cm", "Centimeter", "cm", "One hundredth of a meter", &["centimeter", "centimeters", "centimetre", "centimetres"]),
    unit("m", "Meter", "m", "Base unit of length in SI system", &["meter", "meters", "metre", "metres"]),
    unit("km", "Kilometer", "km", "One thousand meters", &["kilometer", "kilometers", "kilometre", "kilometres"]),
    unit("in", "Inch", "in", "Imperial unit, 1/12 of a foot", &["inch", "inches", "\""]),
    unit("ft", "Foot", "ft", "Imperial unit, 12 inches", &["foot", "feet", "'"]),
    unit("yd", "Yard", "yd", "Imperial unit, 3 feet", &["yard", "yards"]),
    unit("mi", "Mile", "mi", "Imperial unit, 5280 feet", &["mile", "miles"]),
];

pub(super) const WEIGHT: &[Unit] = &[
    unit("mg", "Milligram", "mg", "One thousandth of a gram", &["milligram", "milligrams"]),
    unit("g", "Gram", "g", "Base unit of mass in metric system", &["gram", "grams"]),
    unit("kg", "Kilogram", "kg", "One thousand grams, SI base unit", &["kilogram", "kilograms", "kilo", "kilos"]),
    unit("oz", "Ounce", "oz", "Imperial unit, 1/16 of a pound", &["ounce", "ounces"]),
    unit("lb", "Pound", "lb", "Imperial unit of weight", &["lbs", "pound", "pounds"]),
    unit("st", "Stone", "st", "British unit, 14 pounds", &["stone", "stones"]),
    unit("t", "Metric Ton", "t", "One thousand kilograms", &["ton", "tons", "tonne", "tonnes"]),
];

pub(super) const TEMPERATURE: &[Unit] = &[
    unit("C", "Celsius", "°C", "Water freezes at 0°, boils at 100°", &["°C", "celsius"]),
    unit("F", "Fahrenheit", "°F", "Water freezes at 32°, boils at 212°", &["°F", "fahrenheit"]),
    unit("K", "Kelvin", "K", "Absolute temperature scale, SI base unit", &["kelvin"]),
];

pub(super) const AREA: &[Unit] = &[
    unit("mm2", "Square Millimeter", "mm²", "Very small area measurement", &["mm²"]),
    unit("cm2", "Square Centimeter", "cm²", "Common small area measurement", &["cm²"]),
    unit("m2", "Square Meter", "m²", "SI unit of area", &["m²", "sqm"]),
    unit("ha", "Hectare", "ha", "10,000 square meters", &["hectare", "hectares"]),
    unit("km2", "Square Kilometer", "km²", "Large area measurement", &["km²"]),
    unit("in2", "Square Inch", "in²", "Imperial small area unit", &["in²"]),
    unit("ft2", "Square Foot", "ft²", "Common imperial area unit", &["ft²", "sqft"]),
    unit("ac", "Acre", "ac", "43,560 square feet", &["acre", "acres"]),
    unit("mi2", "Square Mile", "mi²", "Large imperial area unit", &["mi²"]),
];

pub(super) const VOLUME: &[Unit] = &[
    unit("ml", "Milliliter", "ml", "One thousandth of a liter", &["milliliter", "milliliters", "millilitre", "millilitres"]),
    unit("l", "Liter", "L", "Common metric volume unit", &["L", "liter", "liters", "litre", "litres"]),
    unit("floz", "Fluid Ounce", "fl oz", "Small imperial volume unit", &["fl_oz", "fl-oz", "fl oz", "fluid ounce", "fluid ounces"]),
    unit("cup", "Cup", "cup", "Cooking measurement, 8 fl oz", &["cups"]),
    unit("pt", "Pint", "pt", "Imperial volume unit", &["pint", "pints"]),
    unit("qt", "Quart", "qt", "Imperial unit, 2 pints", &["quart", "quarts"]),
    unit("gal", "Gallon", "gal", "Imperial unit, 4 quarts", &["gallon", "gallons"]),
];

pub(super) const TIME: &[Unit] = &[
    unit("ms", "Millisecond", "ms", "One thousandth of a second", &["millisecond", "milliseconds"]),
    unit("s", "Second", "s", "SI base unit of time", &["sec", "second", "seconds"]),
    unit("min", "Minute", "min", "60 seconds", &["minute", "minutes"]),
    unit("h", "Hour", "h", "60 minutes", &["hr", "hour", "hours"]),
    unit("d", "Day", "d", "24 hours", &["day", "days"]),
    unit("wk", "Week", "wk", "7 days", &["w", "week", "weeks"]),
    unit("mo", "Month", "mo", "Approximately 30.44 days", &["month", "months"]),
    unit("yr", "Year", "yr", "365.25 days", &["y", "year", "years"]),
];

pub(super) const SPEED: &[Unit] = &[
    unit("m/s", "Meters per second", "m/s", "SI unit of speed", &["mps"]),
    unit("km/h", "Kilometers per hour", "km/h", "Common metric speed unit", &["kph", "kmh"]),
    unit("mph", "Miles per hour", "mph", "Imperial speed unit", &["mi/h"]),
    unit("kn", "Knot", "kn", "Nautical speed unit", &["knot", "knots"]),
    unit("ft/s", "Feet per second", "ft/s", "Imperial speed unit", &["ftps", "fps"]),
];

pub(super) const DATA: &[Unit] = &[
    unit("bit", "Bit", "bit", "A single binary digit", &["bits"]),
    unit("B", "Byte", "B", "8 bits of data", &["b", "byte", "bytes"]),
    unit("KB", "Kilobyte", "KB", "1,024 bytes", &["kilobyte", "kilobytes"]),
    unit("MB", "Megabyte", "MB", "1,024 KB", &["megabyte", "megabytes"]),
    unit("GB", "Gigabyte", "GB", "1,024 MB", &["gigabyte", "gigabytes"]),
    unit("TB", "Terabyte", "TB", "1,024 GB", &["terabyte", "terabytes"]),
    unit("PB", "Petabyte", "PB", "1,024 TB", &["petabyte", "petabytes"]),
];

pub(super) const PRESSURE: &[Unit] = &[
    unit("Pa", "Pascal", "Pa", "SI unit of pressure", &["pascal", "pascals"]),
    unit("kPa", "Kilopascal", "kPa", "1,000 pascals", &["kilopascal", "kilopascals"]),
    unit("bar", "Bar", "bar", "100,000 pascals", &[]),
    unit("psi", "Pound per square inch", "psi", "Imperial pressure unit", &[]),
    unit("atm", "Atmosphere", "atm", "Standard atmospheric pressure", &["atmosphere", "atmospheres"]),
    unit("torr", "Torr", "Torr", "1/760 of an atmosphere", &["mmHg"]),
];

pub(super) const ANGLE: &[Unit] = &[
    unit("deg", "Degree", "°", "1/360 of a full rotation", &["°", "degree", "degrees"]),
    unit("rad", "Radian", "rad", "SI unit of angle", &["radian", "radians"]),
    unit("grad", "Gradian", "grad", "1/400 of a full rotation", &["gon", "gradian", "gradians"]),
    unit("arcmin", "Arcminute", "'", "1/60 of a degree", &["arcminute", "arcminutes"]),
    unit("arcsec", "Arcsecond", "\"", "1/60 of an arcminute", &["arcsecond", "arcseconds"]),
    unit("turn", "Turn", "turn", "One full rotation", &["turns", "rev", "revolution"]),
];

pub(super) const ENERGY: &[Unit] = &[
    unit("J", "Joule", "J", "SI unit of energy", &["joule", "joules"]),
    unit("kJ", "Kilojoule", "kJ", "1,000 joules", &["kilojoule", "kilojoules"]),
    unit("cal", "Calorie", "cal", "Energy to heat 1g water by 1°C", &["calorie", "calories"]),
    unit("kcal", "Kilocalorie", "kcal", "1,000 calories (food calorie)", &["kilocalorie", "kilocalories"]),
    unit("Wh", "Watt-hour", "Wh", "3,600 joules", &["watt-hour"]),
    unit("kWh", "Kilowatt Hour", "kWh", "Electrical energy unit", &["kilowatt-hour"]),
    unit("BTU", "British Thermal Unit", "BTU", "Imperial energy unit", &[]),
];

pub(super) const POWER: &[Unit] = &[
    unit("W", "Watt", "W", "SI unit of power", &["watt", "watts"]),
    unit("kW", "Kilowatt", "kW", "1,000 watts", &["kilowatt", "kilowatts"]),
    unit("hp", "Horsepower", "hp", "Imperial power unit", &["horsepower"]),
    unit("BTU/h", "BTU per hour", "BTU/h", "Imperial power unit", &["btuh"]),
];

pub(super) const FORCE: &[Unit] = &[
    unit("N", "Newton", "N", "SI unit of force", &["newton", "newtons"]),
    unit("kN", "Kilonewton", "kN", "1,000 newtons", &["kilonewton", "kilonewtons"]),
    unit("dyn", "Dyne", "dyn", "CGS unit of force", &["dyne", "dynes"]),
    unit("lbf", "Pound-force", "lbf", "Imperial force unit", &["pound-force"]),
    unit("kgf", "Kilogram-force", "kgf", "Metric force unit", &["kilogram-force"]),
];

pub(super) const FREQUENCY: &[Unit] = &[
    unit("Hz", "Hertz", "Hz", "SI unit of frequency", &["hertz"]),
    unit("kHz", "Kilohertz", "kHz", "1,000 Hz", &["kilohertz"]),
    unit("MHz", "Megahertz", "MHz", "1,000,000 Hz", &["megahertz"]),
    unit("GHz", "Gigahertz", "GHz", "1,000,000,000 Hz", &["gigahertz"]),
];

pub(super) const FUEL: &[Unit] = &[
    unit("L/100km", "Liters per 100 Kilometers", "L/100km", "Metric fuel consumption", &["l100km"]),
    unit("mpg", "Miles per gallon", "mpg", "Imperial fuel efficiency", &[]),
    unit("km/L", "Kilometers per liter", "km/L", "Metric fuel efficiency", &["kml", "kmpl"]),
];

pub(super) const RESOLUTION: &[Unit] = &[
    unit("px", "Pixels", "px", "Digital image unit", &["pixel", "pixels"]),
    unit("dpi", "Dots per inch", "DPI", "Print resolution", &[]),
    unit("ppi", "Pixels per inch", "PPI", "Screen resolution", &[]),
];

pub(super) const BMI: &[Unit] = &[
    unit("kg/m²", "Kilograms per Square Meter", "kg/m²", "", &["kg/m2"]),
    unit("lb/ft²", "Pounds per Square Foot", "lb/ft²", "", &["lb/ft2"]),
    unit("BMI", "Body Mass Index", "BMI", "Body Mass Index", &[]),
];

pub(super) const CLOTHING: &[Unit] = &[
    unit("US", "US Size", "US", "United States clothing size", &[]),
    unit("EU", "EU Size", "EU", "European clothing size", &[]),
    unit("UK", "UK Size", "UK", "United Kingdom clothing size", &[]),
    unit("JP", "JP Size", "JP", "Japanese clothing size", &[]),
];

pub(super) const SHOE: &[Unit] = &[
    unit("US", "US Size", "US", "United States shoe size", &[]),
    unit("EU", "EU Size", "EU", "European shoe size", &[]),
    unit("UK", "UK Size", "UK", "United Kingdom shoe size", &[]),
    unit("JP", "JP Size", "JP", "Japanese shoe size", &[]),
];

pub(super) const WIND: &[Unit] = &[
    unit("m/s", "Meter per Second", "m/s", "SI wind speed", &["mps"]),
    unit("km/h", "Kilometers per hour", "km/h", "Metric wind speed", &["kph", "kmh"]),
    unit("mph", "Miles per hour", "mph", "Imperial wind speed", &[]),
    unit("knot", "Knots", "kn", "Nautical wind speed", &["kn", "knots"]),
    unit("Bf", "Beaufort Scale", "Bf", "Wind force scale 0-12", &["beaufort"]),
];

pub(super) const TIRE: &[Unit] = &[
    unit("psi", "PSI", "psi", "Pounds per square inch", &[]),
    unit("kPa", "Kilopascal", "kPa", "SI pressure unit", &[]),
    unit("bar", "Bar", "bar", "Metric pressure unit", &[]),
];

pub(super) const ROMAN: &[Unit] = &[
    unit("decimal", "Decimal", "123", "Standard decimal numbers", &["arabic", "number"]),
    unit("roman", "Roman", "XII", "Roman numeral system", &["numeral", "numerals"]),
];

pub(super) const CURRENCY: &[Unit] = &[
    unit("USD", "US Dollar", "USD", "USD currency", &["$", "dollar", "dollars"]),
    unit("EUR", "Euro", "EUR", "EUR currency", &["€", "euro", "euros"]),
    unit("GBP", "British Pound", "GBP", "GBP currency", &["£"]),
    unit("JPY", "Japanese Yen", "JPY", "JPY currency", &["¥", "yen"]),
    unit("AUD", "Australian Dollar", "AUD", "AUD currency", &[]),
    unit("CAD", "Canadian Dollar", "CAD", "CAD currency", &[]),
    unit("CHF", "Swiss Franc", "CHF", "CHF currency", &[]),
    unit("CNY", "Chinese Yuan", "CNY", "CNY currency", &["yuan"]),
    unit("HKD", "Hong Kong Dollar", "HKD", "HKD currency", &[]),
    unit("NZD", "New Zealand Dollar", "NZD", "NZD currency", &[]),
    unit("SEK", "Swedish Krona", "SEK", "SEK currency", &[]),
    unit("KRW", "South Korean Won", "KRW", "KRW currency", &["won"]),
    unit("SGD", "Singapore Dollar", "SGD", "SGD currency", &[]),
    unit("NOK", "Norwegian Krone", "NOK", "NOK currency", &[]),
    unit("MXN", "Mexican Peso", "MXN", "MXN currency", &[]),
    unit("INR", "Indian Rupee", "INR", "INR currency", &["rupee", "rupees"]),
    unit("RUB", "Russian Ruble", "RUB", "RUB currency", &[]),
    unit("ZAR", "South African Rand", "ZAR", "ZAR currency", &["rand"]),
    unit("TRY", "Turkish Lira", "TRY", "TRY currency", &["lira"]),
    unit("BRL", "Brazilian Real", "BRL", "BRL currency", &["real", "reais"]),
    unit("TWD", "New Taiwan Dollar", "TWD", "TWD currency", &[]),
];
