use crate::types::report::Grade;

pub fn grade_for(total: f64) -> Grade {
    if total >= 90.0 {
        Grade::A
    } else if total >= 80.0 {
        Grade::B
    } else if total >= 70.0 {
        Grade::C
    } else if total >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

pub fn percentile_for(total: f64) -> &'static str {
    if total >= 90.0 {
        "95th+ (Top 10%)"
    } else if total >= 80.0 {
        "80th-95th (Top 20%)"
    } else if total >= 70.0 {
        "60th-80th (Top 40%)"
    } else if total >= 60.0 {
        "40th-60th (Middle)"
    } else {
        "Below 40th"
    }
}
