use super::{CATEGORY_SIZE, QuestionSet};
use crate::models::category::Category;

pub struct IntellectualDisability;

impl QuestionSet for IntellectualDisability {
    fn category(&self) -> Category {
        Category::IntellectualDisability
    }

    fn prompts(&self) -> &[&'static str; CATEGORY_SIZE] {
        &PROMPTS
    }
}

const PROMPTS: [&str; CATEGORY_SIZE] = [
    "Apakah anak kesulitan memahami atau menggunakan uang?",
    "Apakah anak kesulitan mengenal angka 1–10 dan huruf A–F?",
    "Apakah anak kesulitan memahami isyarat sosial?",
    "Apakah anak kesulitan menyiapkan atau mengatur barangnya sendiri?",
    "Apakah anak kesulitan mengenal huruf, angka, membaca sederhana?",
    "Apakah anak kesulitan memahami konsep waktu atau nilai uang?",
    "Apakah anak kesulitan memahami maksud/perasaan orang lain?",
    "Apakah anak sering kesulitan membangun/menjaga pertemanan?",
    "Apakah anak bisa merawat diri tapi masih sering perlu diingatkan?",
    "Apakah anak memerlukan waktu lama untuk terbiasa menjaga kebersihan diri?",
    "Apakah anak tidak tahu waktu istirahat sekolah?",
    "Apakah anak hanya bicara 1–2 kata saja?",
    "Apakah anak masih perlu bantuan dalam kegiatan dasar?",
    "Apakah anak harus selalu diawasi?",
    "Apakah anak hanya mampu menggunakan benda sederhana?",
    "Apakah anak kesulitan mencocokkan benda berdasarkan warna/bentuk/ukuran?",
    "Apakah anak lebih sering berkomunikasi tanpa kata?",
    "Apakah anak kadang tantrum atau menolak aktivitas tanpa alasan jelas?",
];
