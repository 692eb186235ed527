use super::{CATEGORY_SIZE, QuestionSet};
use crate::models::category::Category;

/// ADHD items. The first nine cover inattention, the last nine
/// hyperactivity and impulsivity.
pub struct Adhd;

impl QuestionSet for Adhd {
    fn category(&self) -> Category {
        Category::Adhd
    }

    fn prompts(&self) -> &[&'static str; CATEGORY_SIZE] {
        &PROMPTS
    }
}

const PROMPTS: [&str; CATEGORY_SIZE] = [
    "Apakah anak mudah ceroboh?",
    "Apakah anak susah fokus saat mengerjakan tugas?",
    "Apakah anak sulit konsentrasi saat orang lain bicara?",
    "Apakah anak kerap tidak mengikuti instruksi?",
    "Apakah anak kesulitan mengatur jadwal?",
    "Apakah anak gemar menunda tugas sulit?",
    "Apakah anak sering menghilangkan barang penting?",
    "Apakah fokus anak mudah teralihkan?",
    "Apakah anak kesulitan mengingat jadwal?",
    "Apakah anak sering menggerakkan tangan/kaki saat duduk lama?",
    "Apakah anak sering meninggalkan tempat duduk?",
    "Apakah anak sering berlari/memanjat berlebihan?",
    "Apakah anak sulit bermain dengan tenang?",
    "Apakah anak tidak bisa diam dan terus bergerak?",
    "Apakah anak suka bicara terus meskipun harus diam?",
    "Apakah anak suka memotong pembicaraan?",
    "Apakah anak sulit menunggu giliran?",
    "Apakah anak sering mengganggu orang lain?",
];
