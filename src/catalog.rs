// src/catalog.rs

use crate::bank::QuestionBank;
use crate::models::question::{Difficulty, QuizQuestion};

fn q(
    id: &str,
    difficulty: Difficulty,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        difficulty,
        prompt: prompt.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
    }
}

/// The static physics catalogue bundled with the engine: ten questions
/// per tier covering energy sources and global warming.
pub fn default_bank() -> QuestionBank {
    use Difficulty::{Easy, Hard, Medium};

    let questions = vec![
        // Mudah: konsep dasar & definisi
        q(
            "e1",
            Easy,
            "Apa satuan energi dalam Sistem Internasional (SI)?",
            ["Joule", "Watt", "Newton", "Ampere"],
            0,
            "Energi diukur dalam joule (J); watt adalah satuan daya.",
        ),
        q(
            "e2",
            Easy,
            "Manakah yang termasuk sumber energi terbarukan?",
            ["Batu bara", "Minyak bumi", "Energi matahari", "Gas alam"],
            2,
            "Energi matahari tidak akan habis, berbeda dengan bahan bakar fosil.",
        ),
        q(
            "e3",
            Easy,
            "Gas rumah kaca utama yang dihasilkan pembakaran bahan bakar fosil adalah ...",
            ["Oksigen", "Karbon dioksida", "Nitrogen", "Helium"],
            1,
            "Pembakaran bahan bakar fosil melepaskan CO2 ke atmosfer.",
        ),
        q(
            "e4",
            Easy,
            "Panel surya mengubah energi cahaya menjadi energi ...",
            ["Kimia", "Listrik", "Bunyi", "Nuklir"],
            1,
            "Sel fotovoltaik mengubah cahaya matahari langsung menjadi listrik.",
        ),
        q(
            "e5",
            Easy,
            "Alat yang mengubah energi gerak angin menjadi energi listrik adalah ...",
            ["Turbin angin", "Panel surya", "Generator diesel", "Reaktor nuklir"],
            0,
            "Turbin angin memutar generator sehingga menghasilkan listrik.",
        ),
        q(
            "e6",
            Easy,
            "Efek rumah kaca yang berlebihan menyebabkan ...",
            [
                "Suhu bumi menurun",
                "Suhu bumi meningkat",
                "Gempa bumi",
                "Gerhana matahari",
            ],
            1,
            "Gas rumah kaca menahan panas sehingga suhu rata-rata bumi naik.",
        ),
        q(
            "e7",
            Easy,
            "Energi yang tersimpan dalam makanan adalah energi ...",
            ["Kimia", "Listrik", "Cahaya", "Bunyi"],
            0,
            "Makanan menyimpan energi kimia yang diubah tubuh menjadi energi gerak dan panas.",
        ),
        q(
            "e8",
            Easy,
            "Satuan daya listrik adalah ...",
            ["Joule", "Newton", "Watt", "Pascal"],
            2,
            "Daya adalah energi per satuan waktu, diukur dalam watt (W).",
        ),
        q(
            "e9",
            Easy,
            "PLTA (Pembangkit Listrik Tenaga Air) memanfaatkan energi ...",
            ["Angin", "Air", "Matahari", "Panas bumi"],
            1,
            "PLTA mengubah energi potensial air menjadi energi listrik.",
        ),
        q(
            "e10",
            Easy,
            "Saat lampu pijar menyala, energi listrik berubah menjadi ...",
            [
                "Cahaya dan panas",
                "Bunyi dan gerak",
                "Kimia dan bunyi",
                "Gerak dan kimia",
            ],
            0,
            "Lampu pijar memancarkan cahaya dan sebagian besar energinya menjadi panas.",
        ),
        // Sedang: penerapan rumus sederhana
        q(
            "m1",
            Medium,
            "Sebuah benda bermassa 2 kg bergerak dengan kecepatan 3 m/s. Energi kinetiknya adalah ...",
            ["6 J", "9 J", "12 J", "18 J"],
            1,
            "Ek = 1/2 m v^2 = 1/2 x 2 x 3^2 = 9 J.",
        ),
        q(
            "m2",
            Medium,
            "Benda 1 kg berada pada ketinggian 5 m (g = 10 m/s^2). Energi potensialnya adalah ...",
            ["5 J", "15 J", "50 J", "500 J"],
            2,
            "Ep = mgh = 1 x 10 x 5 = 50 J.",
        ),
        q(
            "m3",
            Medium,
            "Lampu berdaya 100 W menyala selama 10 sekon. Energi yang digunakan adalah ...",
            ["10 J", "100 J", "1.000 J", "10.000 J"],
            2,
            "W = P x t = 100 x 10 = 1.000 J.",
        ),
        q(
            "m4",
            Medium,
            "Sebuah mesin menerima energi 200 J dan menghasilkan kerja berguna 50 J. Efisiensinya adalah ...",
            ["20%", "25%", "40%", "50%"],
            1,
            "Efisiensi = (50/200) x 100% = 25%.",
        ),
        q(
            "m5",
            Medium,
            "Lampu 50 W yang menyala selama 20 jam menggunakan energi sebesar ...",
            ["0,5 kWh", "1 kWh", "2 kWh", "10 kWh"],
            1,
            "W = 50 W x 20 jam = 1.000 Wh = 1 kWh.",
        ),
        q(
            "m6",
            Medium,
            "Usaha sebesar 600 J dilakukan dalam waktu 30 sekon. Daya yang dihasilkan adalah ...",
            ["10 W", "20 W", "30 W", "60 W"],
            1,
            "P = W/t = 600/30 = 20 W.",
        ),
        q(
            "m7",
            Medium,
            "Meningkatnya kadar CO2 di atmosfer terutama menyebabkan ...",
            [
                "Naiknya suhu rata-rata bumi",
                "Turunnya permukaan laut",
                "Bertambahnya lapisan ozon",
                "Berkurangnya uap air",
            ],
            0,
            "CO2 menyerap radiasi inframerah sehingga suhu rata-rata bumi naik.",
        ),
        q(
            "m8",
            Medium,
            "Energi mekanik suatu benda merupakan jumlah dari ...",
            [
                "Energi kinetik dan energi potensial",
                "Energi kimia dan energi listrik",
                "Energi panas dan energi bunyi",
                "Energi cahaya dan energi nuklir",
            ],
            0,
            "Em = Ek + Ep.",
        ),
        q(
            "m9",
            Medium,
            "Pada benda yang jatuh bebas terjadi perubahan energi ...",
            [
                "Kinetik menjadi potensial",
                "Potensial menjadi kinetik",
                "Listrik menjadi kinetik",
                "Kimia menjadi potensial",
            ],
            1,
            "Semakin rendah posisi benda, Ep berkurang dan Ek bertambah.",
        ),
        q(
            "m10",
            Medium,
            "Manakah kelompok sumber energi yang seluruhnya berasal dari fosil?",
            [
                "Angin, air, matahari",
                "Batu bara, minyak bumi, gas alam",
                "Biomassa, panas bumi, angin",
                "Matahari, gas alam, air",
            ],
            1,
            "Batu bara, minyak bumi, dan gas alam terbentuk dari fosil organisme purba.",
        ),
        // Sulit: perhitungan & analisis lanjut
        q(
            "h1",
            Hard,
            "Sebuah benda bermassa 4 kg bergerak dengan kecepatan 72 km/jam. Energi kinetiknya adalah ...",
            ["400 J", "800 J", "1.600 J", "10.368 J"],
            1,
            "72 km/jam = 20 m/s, sehingga Ek = 1/2 x 4 x 20^2 = 800 J.",
        ),
        q(
            "h2",
            Hard,
            "Air terjun mengalirkan 100 kg air tiap sekon dari ketinggian 20 m (g = 10 m/s^2). Jika efisiensi generator 50%, daya listrik yang dihasilkan adalah ...",
            ["5 kW", "10 kW", "20 kW", "40 kW"],
            1,
            "Daya air = mgh/t = 100 x 10 x 20 = 20.000 W; dengan efisiensi 50% dihasilkan 10 kW.",
        ),
        q(
            "h3",
            Hard,
            "Kalor yang dibutuhkan untuk menaikkan suhu 2 kg air sebesar 10 derajat C (c = 4.200 J/kg C) adalah ...",
            ["8.400 J", "42.000 J", "84.000 J", "840.000 J"],
            2,
            "Q = m c delta T = 2 x 4.200 x 10 = 84.000 J.",
        ),
        q(
            "h4",
            Hard,
            "Panel surya seluas 2 m^2 menerima intensitas 1.000 W/m^2 dengan efisiensi 20%. Daya listrik yang dihasilkan adalah ...",
            ["200 W", "400 W", "1.000 W", "2.000 W"],
            1,
            "P = 1.000 x 2 x 20% = 400 W.",
        ),
        q(
            "h5",
            Hard,
            "Lampu 60 W menyala 12 jam setiap hari selama 30 hari. Energi yang terpakai adalah ...",
            ["2,16 kWh", "21,6 kWh", "216 kWh", "2.160 kWh"],
            1,
            "W = 60 W x 12 jam x 30 hari = 21.600 Wh = 21,6 kWh.",
        ),
        q(
            "h6",
            Hard,
            "Bola dilempar vertikal ke atas dengan kecepatan 20 m/s (g = 10 m/s^2, gesekan diabaikan). Ketinggian maksimumnya adalah ...",
            ["10 m", "20 m", "40 m", "80 m"],
            1,
            "Seluruh Ek berubah menjadi Ep: h = v^2/(2g) = 400/20 = 20 m.",
        ),
        q(
            "h7",
            Hard,
            "Jika kecepatan sebuah benda menjadi dua kali semula, energi kinetiknya menjadi ...",
            ["Dua kali", "Empat kali", "Setengah", "Delapan kali"],
            1,
            "Ek sebanding dengan v^2, sehingga dua kali kecepatan berarti empat kali energi kinetik.",
        ),
        q(
            "h8",
            Hard,
            "Mencairnya es di kutub dapat mempercepat pemanasan global karena ...",
            [
                "Albedo permukaan bumi menurun sehingga lebih banyak radiasi diserap",
                "Kadar oksigen di atmosfer meningkat",
                "Permukaan laut memantulkan seluruh cahaya",
                "Suhu air laut selalu tetap",
            ],
            0,
            "Es memantulkan cahaya matahari; saat mencair, laut yang lebih gelap menyerap lebih banyak radiasi.",
        ),
        q(
            "h9",
            Hard,
            "Mobil bermassa 800 kg direm dari kecepatan 20 m/s hingga berhenti. Energi yang berubah menjadi kalor adalah ...",
            ["16 kJ", "80 kJ", "160 kJ", "320 kJ"],
            2,
            "Seluruh Ek = 1/2 x 800 x 20^2 = 160.000 J berubah menjadi kalor pada rem.",
        ),
        q(
            "h10",
            Hard,
            "Lift bermassa total 500 kg naik setinggi 10 m dalam 20 sekon (g = 10 m/s^2). Daya minimum motornya adalah ...",
            ["250 W", "2.500 W", "5.000 W", "25.000 W"],
            1,
            "P = mgh/t = (500 x 10 x 10)/20 = 2.500 W.",
        ),
    ];

    QuestionBank::new(questions).expect("built-in catalogue is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QUESTIONS_PER_SESSION;

    #[test]
    fn every_tier_can_fill_a_session() {
        let bank = default_bank();
        for difficulty in Difficulty::ALL {
            assert!(bank.count_for(difficulty) >= QUESTIONS_PER_SESSION);
        }
    }

    #[test]
    fn catalogue_validates_cleanly() {
        // `default_bank` would panic on an invalid question; reaching
        // here means ids are unique and every option list is well formed.
        assert_eq!(default_bank().len(), 30);
    }
}
