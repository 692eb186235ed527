use super::{CATEGORY_SIZE, QuestionSet};
use crate::models::category::Category;

/// Autism spectrum items: social communication, repetitive behavior,
/// routine rigidity, and sensory response.
pub struct Autism;

impl QuestionSet for Autism {
    fn category(&self) -> Category {
        Category::Autism
    }

    fn prompts(&self) -> &[&'static str; CATEGORY_SIZE] {
        &PROMPTS
    }
}

const PROMPTS: [&str; CATEGORY_SIZE] = [
    "Apakah anak Anda kesulitan dalam memahami instruksi atau perintah dari orang lain?",
    "Ketika orang lain berbicara kepada anak, apakah anak kesulitan menanggapi?",
    "Apakah anak menunjukkan ketidakpedulian saat ada orang lain yang menangis/marah?",
    "Apakah anak menunjukkan ekspresi wajah yang tidak sesuai situasi sosial?",
    "Apakah anak jarang menggunakan gerakan tangan atau tubuh saat menyampaikan sesuatu?",
    "Apakah anak kesulitan melakukan kontak mata?",
    "Apakah anak sering kesulitan untuk mendekati anak lain?",
    "Apakah anak kesulitan beradaptasi dengan situasi/orang baru?",
    "Apakah anak menunjukkan gerakan tubuh berulang?",
    "Apakah anak sering mengulang kata atau menirukan dialog TV?",
    "Apakah anak bisa memainkan mainan sesuai fungsinya?",
    "Apakah anak kesulitan beradaptasi dengan perubahan rutinitas?",
    "Apakah anak marah/tantrum saat di lingkungan baru?",
    "Apakah anak memilih makanan/aktivitas yang sama setiap hari?",
    "Apakah anak enggan mencoba hal baru?",
    "Apakah anak fokus berlebihan pada satu objek/topik?",
    "Apakah anak menolak disentuh di area tubuh tertentu?",
    "Apakah anak tidak menangis saat terluka?",
];
